//! Persisted key-value state and the in-process analysis cache
//!
//! `Store` wraps a backend with best-effort accessors for each persisted
//! key. Read failures yield defaults and write failures are logged at debug
//! level; in-memory behavior never depends on storage succeeding.

mod cache;

pub use cache::{AnalysisCache, CacheEntry};

use crate::game::SessionSnapshot;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const HINT_DOTS_KEY: &str = "mh.hintDots";
pub const TRAY_KEY: &str = "mh.clickedWords";
pub const SELECTED_KEY: &str = "mh.practice.selected";
pub const SESSION_KEY: &str = "swi.game.state.v1";

/// File name used inside the data directory
pub const STORE_FILE: &str = "store.json";

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O failed: {e}"),
            Self::Json(e) => write!(f, "Stored data is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Raw key-value storage
pub trait StoreBackend: Send {
    /// Value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the value cannot be persisted.
    fn write(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the key cannot be removed.
    fn reset(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile backend, used for tests and `--data-dir`-less runs
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: FxHashMap<String, Value>,
}

impl StoreBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn reset(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// One JSON object on disk, rewritten atomically on every change
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, values: &Map<String, Value>) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, values)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl StoreBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut values = self.load().unwrap_or_else(|e| {
            log::debug!("discarding unreadable store {}: {e}", self.path.display());
            Map::new()
        });
        values.insert(key.to_string(), value);
        self.save(&values)
    }

    fn reset(&mut self, key: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

/// Trim, drop blanks and case-insensitive duplicates, keeping first spelling
#[must_use]
pub fn clean_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter_map(|w| {
            let trimmed = w.as_ref().trim();
            (!trimmed.is_empty() && seen.insert(trimmed.to_lowercase()))
                .then(|| trimmed.to_string())
        })
        .collect()
}

/// Best-effort typed access to persisted state
pub struct Store {
    backend: Box<dyn StoreBackend>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// File-backed store inside `dir`
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(FileBackend::new(dir.as_ref().join(STORE_FILE)))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    fn read_value(&self, key: &str) -> Option<Value> {
        self.backend
            .read(key)
            .inspect_err(|e| log::debug!("store read '{key}' failed: {e}"))
            .ok()
            .flatten()
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_value(key)?;
        serde_json::from_value(value)
            .inspect_err(|e| log::debug!("store value '{key}' has wrong shape: {e}"))
            .ok()
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(StoreError::from)
            .and_then(|v| self.backend.write(key, v));
        if let Err(e) = result {
            log::debug!("store write '{key}' failed: {e}");
        }
    }

    fn reset(&mut self, key: &str) {
        if let Err(e) = self.backend.reset(key) {
            log::debug!("store reset '{key}' failed: {e}");
        }
    }

    /// Whether hint dots are shown; on unless turned off
    #[must_use]
    pub fn hint_dots(&self) -> bool {
        self.read(HINT_DOTS_KEY).unwrap_or(true)
    }

    pub fn set_hint_dots(&mut self, on: bool) {
        self.write(HINT_DOTS_KEY, &on);
    }

    /// Previously clicked words, cleaned
    ///
    /// Non-string entries are skipped.
    #[must_use]
    pub fn tray_words(&self) -> Vec<String> {
        let Some(Value::Array(items)) = self.read_value(TRAY_KEY) else {
            return Vec::new();
        };
        clean_words(items.iter().filter_map(Value::as_str))
    }

    pub fn set_tray_words(&mut self, words: &[String]) {
        self.write(TRAY_KEY, &clean_words(words));
    }

    /// Append a word to the tray unless already present (ignoring case)
    ///
    /// Returns whether the tray changed.
    pub fn add_tray_word(&mut self, word: &str) -> bool {
        let mut tray = self.tray_words();
        let before = tray.len();
        tray.push(word.to_string());
        let tray = clean_words(tray);
        let changed = tray.len() != before;
        if changed {
            self.write(TRAY_KEY, &tray);
        }
        changed
    }

    /// Remove a word from the tray (ignoring case); returns whether it was there
    pub fn remove_tray_word(&mut self, word: &str) -> bool {
        let needle = word.trim().to_lowercase();
        let mut tray = self.tray_words();
        let before = tray.len();
        tray.retain(|w| w.to_lowercase() != needle);
        let changed = tray.len() != before;
        if changed {
            self.write(TRAY_KEY, &tray);
        }
        changed
    }

    pub fn clear_tray(&mut self) {
        self.reset(TRAY_KEY);
    }

    #[must_use]
    pub fn selected_words(&self) -> Vec<String> {
        self.read(SELECTED_KEY).unwrap_or_default()
    }

    pub fn set_selected_words(&mut self, words: &[String]) {
        self.write(SELECTED_KEY, &words);
    }

    pub fn clear_selected(&mut self) {
        self.reset(SELECTED_KEY);
    }

    #[must_use]
    pub fn session(&self) -> Option<SessionSnapshot> {
        self.read(SESSION_KEY)
    }

    pub fn save_session(&mut self, snapshot: &SessionSnapshot) {
        self.write(SESSION_KEY, snapshot);
    }

    pub fn clear_session(&mut self) {
        self.reset(SESSION_KEY);
    }
}

//! Interactive reading session
//!
//! Clicking a word shows a heuristic segmentation right away and marks the
//! word's index as pending. When the remote fragments arrive they are
//! aligned to the word and merged with what is shown. A pending index, or a
//! word whose analysis is already cached, never triggers a second request.

use super::tokens::{Token, tokenize};
use crate::core::Fragment;
use crate::segment::{HeuristicSegmenter, align, merge};
use crate::service::{AnalysisDetails, AnalysisService, AnalysisType, ServiceError};
use crate::store::AnalysisCache;
use rustc_hash::{FxHashMap, FxHashSet};

/// What a click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// No word at that index
    Ignored,
    /// Served from the analysis cache; no request needed
    Cached,
    /// A lookup for this index is already in flight
    AlreadyPending,
    /// Heuristic shown; the caller should fetch fragments for `word`
    Requested { word: String },
}

/// A passage being read, with per-word segmentations
#[derive(Debug, Clone, Default)]
pub struct ReaderSession {
    tokens: Vec<Token>,
    segmentations: FxHashMap<usize, Vec<Fragment>>,
    pending: FxHashSet<usize>,
    errors: FxHashMap<usize, ServiceError>,
    cache: AnalysisCache,
    segmenter: HeuristicSegmenter,
}

impl ReaderSession {
    #[must_use]
    pub fn new(text: &str, segmenter: HeuristicSegmenter) -> Self {
        Self {
            tokens: tokenize(text),
            segmenter,
            ..Self::default()
        }
    }

    /// Replace the passage; drops every segmentation, pending lookup and
    /// cached analysis
    pub fn set_text(&mut self, text: &str) {
        self.tokens = tokenize(text);
        self.reset();
    }

    /// Forget all analysis while keeping the passage
    pub fn reset(&mut self) {
        self.segmentations.clear();
        self.pending.clear();
        self.errors.clear();
        self.cache.clear();
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lookup form of the word at `index`
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.tokens
            .get(index)
            .filter(|t| t.is_word())
            .map(|t| t.word.as_str())
    }

    #[must_use]
    pub fn segmentation(&self, index: usize) -> Option<&[Fragment]> {
        self.segmentations.get(&index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    /// Last lookup failure for `index`, cleared by the next click
    #[must_use]
    pub fn error(&self, index: usize) -> Option<&ServiceError> {
        self.errors.get(&index)
    }

    #[must_use]
    pub const fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    fn show(&mut self, index: usize, candidate: Vec<Fragment>) {
        let current = self.segmentations.remove(&index).unwrap_or_default();
        self.segmentations.insert(index, merge(current, candidate));
    }

    /// Handle a click on the word at `index`
    pub fn click(&mut self, index: usize) -> Click {
        let Some(word) = self.word(index).map(str::to_string) else {
            return Click::Ignored;
        };
        if self.pending.contains(&index) {
            return Click::AlreadyPending;
        }
        self.errors.remove(&index);

        if let Some(cached) = self.cache.fragments(&word).map(<[Fragment]>::to_vec) {
            self.show(index, cached);
            return Click::Cached;
        }

        let guess = self.segmenter.segment(&word);
        self.show(index, guess);
        self.pending.insert(index);
        Click::Requested { word }
    }

    /// Deliver the remote result for a pending index
    ///
    /// Returns `false` when `index` was not pending (for example after a
    /// reset), in which case the result is discarded. On failure the
    /// heuristic segmentation stays and the error is recorded.
    pub fn complete(&mut self, index: usize, result: Result<Vec<Fragment>, ServiceError>) -> bool {
        if !self.pending.remove(&index) {
            return false;
        }
        let Some(word) = self.word(index).map(str::to_string) else {
            return false;
        };

        match result {
            Ok(fragments) => {
                let aligned = align(&word, &fragments);
                self.show(index, aligned);
                let merged = self.segmentations.get(&index).cloned().unwrap_or_default();
                self.cache.put_fragments(&word, merged);
            }
            Err(ServiceError::Unavailable) => {
                log::debug!("offline, keeping heuristic for '{word}'");
                self.errors.insert(index, ServiceError::Unavailable);
            }
            Err(e) => {
                log::warn!("analysis of '{word}' failed, keeping heuristic: {e}");
                self.errors.insert(index, e);
            }
        }
        true
    }

    /// Click and, if a request is needed, resolve it synchronously
    pub fn lookup_with<S>(&mut self, index: usize, service: &S) -> Click
    where
        S: AnalysisService + ?Sized,
    {
        let click = self.click(index);
        if let Click::Requested { word } = &click {
            let result = service.morphemes(word);
            self.complete(index, result);
        }
        click
    }

    /// Fetch and cache a richer analysis for the word at `index`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if there is no word at `index` or the service
    /// call fails.
    pub fn details<S>(
        &mut self,
        index: usize,
        service: &S,
        analysis_type: AnalysisType,
    ) -> Result<&AnalysisDetails, ServiceError>
    where
        S: AnalysisService + ?Sized,
    {
        let word = self
            .word(index)
            .map(str::to_string)
            .ok_or(ServiceError::Unavailable)?;
        let value = service.analyze(&word, analysis_type)?;
        self.cache
            .absorb_details(&word, AnalysisDetails::from_value(&value));
        self.cache
            .get(&word)
            .map(|entry| &entry.details)
            .ok_or(ServiceError::Unavailable)
    }
}

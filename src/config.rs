//! Runtime configuration shared by all commands

use crate::affixes::{AffixTable, loader::load_from_file};
use crate::segment::HeuristicSegmenter;
use crate::service::{AnalysisService, DEFAULT_API_URL, HttpAnalysisService, OfflineService};
use crate::store::Store;
use std::io;
use std::path::PathBuf;

/// Default directory for persisted state, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".morpheme_lab";

/// Where to find the analysis service, state and affix tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    /// Custom affix file replacing the embedded tables
    pub affixes: Option<PathBuf>,
    /// Never contact the analysis service
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            affixes: None,
            offline: false,
        }
    }
}

impl Config {
    /// Heuristic segmenter over the configured affix table
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a custom affix file cannot be read.
    pub fn segmenter(&self) -> io::Result<HeuristicSegmenter> {
        let table = match &self.affixes {
            Some(path) => {
                let table = load_from_file(path)?;
                log::info!(
                    "loaded {} prefixes, {} suffixes from {}",
                    table.prefixes().len(),
                    table.suffixes().len(),
                    path.display()
                );
                table
            }
            None => AffixTable::embedded(),
        };
        Ok(HeuristicSegmenter::new(table))
    }

    /// Analysis service for this run
    ///
    /// Falls back to the offline service if the HTTP client cannot be built.
    #[must_use]
    pub fn service(&self) -> Box<dyn AnalysisService + Send> {
        if self.offline {
            return Box::new(OfflineService);
        }
        match HttpAnalysisService::new(self.api_url.clone()) {
            Ok(service) => Box::new(service),
            Err(e) => {
                log::warn!("analysis service unavailable, running offline: {e}");
                Box::new(OfflineService)
            }
        }
    }

    /// File-backed store in the data directory
    #[must_use]
    pub fn store(&self) -> Store {
        Store::open(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{AnalysisType, ServiceError};
    use std::fs;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:5001/api");
        assert_eq!(config.data_dir, PathBuf::from(".morpheme_lab"));
        assert!(!config.offline);
    }

    #[test]
    fn offline_service_never_answers() {
        let config = Config {
            offline: true,
            ..Config::default()
        };
        let service = config.service();
        assert_eq!(
            service.analyze("word", AnalysisType::Morphemes),
            Err(ServiceError::Unavailable)
        );
    }

    #[test]
    fn custom_affix_file_replaces_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("affixes.txt");
        fs::write(&path, "zz-\n-qq\n").unwrap();

        let config = Config {
            affixes: Some(path),
            ..Config::default()
        };
        let segmenter = config.segmenter().unwrap();
        let texts: Vec<String> = segmenter
            .segment("zzfooqq")
            .iter()
            .map(|f| f.text().to_string())
            .collect();
        assert_eq!(texts, vec!["zz", "foo", "qq"]);
        assert_eq!(segmenter.segment("unhappy").len(), 1);
    }

    #[test]
    fn missing_affix_file_is_an_error() {
        let config = Config {
            affixes: Some(PathBuf::from("/definitely/not/here.txt")),
            ..Config::default()
        };
        assert!(config.segmenter().is_err());
    }
}

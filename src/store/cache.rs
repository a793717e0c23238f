//! Process-local analysis cache
//!
//! Keyed by lowercased word. Holds the latest merged segmentation plus any
//! richer analysis fetched for the word, so repeated lookups skip the network.

use crate::core::Fragment;
use crate::service::AnalysisDetails;
use rustc_hash::FxHashMap;

/// Cached analysis for one word
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    pub fragments: Vec<Fragment>,
    pub details: AnalysisDetails,
}

/// Analysis results for the current session
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    entries: FxHashMap<String, CacheEntry>,
}

impl AnalysisCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(word: &str) -> String {
        word.trim().to_lowercase()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&CacheEntry> {
        self.entries.get(&Self::key(word))
    }

    /// Cached segmentation, if any fragments were stored
    #[must_use]
    pub fn fragments(&self, word: &str) -> Option<&[Fragment]> {
        self.get(word)
            .map(|entry| entry.fragments.as_slice())
            .filter(|frags| !frags.is_empty())
    }

    /// Store the merged segmentation for `word`, replacing the previous one
    pub fn put_fragments(&mut self, word: &str, fragments: Vec<Fragment>) {
        self.entries.entry(Self::key(word)).or_default().fragments = fragments;
    }

    /// Merge richer analysis fields into the entry for `word`
    pub fn absorb_details(&mut self, word: &str, details: AnalysisDetails) {
        self.entries
            .entry(Self::key(word))
            .or_default()
            .details
            .absorb(details);
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&Self::key(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything (full text reset)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

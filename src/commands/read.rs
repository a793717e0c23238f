//! Read a passage and click words in it
//!
//! Each clicked word is segmented through a `ReaderSession` and recorded in
//! the tray for later practice.

use crate::core::Fragment;
use crate::reader::{Click, ReaderSession, Token};
use crate::segment::HeuristicSegmenter;
use crate::service::{AnalysisDetails, AnalysisService, AnalysisType, ServiceError};
use crate::store::Store;

/// Outcome of clicking one word
#[derive(Debug, Clone, PartialEq)]
pub struct WordLookup {
    pub index: usize,
    pub word: String,
    pub click: Click,
    pub fragments: Vec<Fragment>,
    pub error: Option<ServiceError>,
    /// Extra analysis, when requested and the service answered
    pub details: Option<AnalysisDetails>,
}

/// Everything a reading pass produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReadResult {
    pub tokens: Vec<Token>,
    pub lookups: Vec<WordLookup>,
    /// Words that were new to the tray
    pub added_to_tray: Vec<String>,
}

/// Click the tokens at `indices` (every word when empty) in order
///
/// Indices that do not point at a word are skipped. With `details`, each
/// clicked word is also sent for that analysis; failures leave it empty.
pub fn read_passage<S>(
    text: &str,
    indices: &[usize],
    details: Option<AnalysisType>,
    segmenter: &HeuristicSegmenter,
    service: &S,
    store: &mut Store,
) -> ReadResult
where
    S: AnalysisService + ?Sized,
{
    let mut session = ReaderSession::new(text, segmenter.clone());
    let targets: Vec<usize> = if indices.is_empty() {
        (0..session.tokens().len()).collect()
    } else {
        indices.to_vec()
    };

    let mut lookups = Vec::new();
    let mut added_to_tray = Vec::new();

    for index in targets {
        let click = session.lookup_with(index, service);
        if click == Click::Ignored {
            log::debug!("token {index} is not a word");
            continue;
        }
        let Some(word) = session.word(index).map(str::to_string) else {
            continue;
        };

        if store.add_tray_word(&word) {
            added_to_tray.push(word.clone());
        }
        let extra = details.and_then(|analysis_type| {
            session
                .details(index, service, analysis_type)
                .inspect_err(|e| log::debug!("{analysis_type} for '{word}' failed: {e}"))
                .ok()
                .cloned()
        });
        lookups.push(WordLookup {
            index,
            word,
            click,
            fragments: session.segmentation(index).map(<[Fragment]>::to_vec).unwrap_or_default(),
            error: session.error(index).cloned(),
            details: extra,
        });
    }

    ReadResult {
        tokens: session.tokens().to_vec(),
        lookups,
        added_to_tray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::OfflineService;
    use serde_json::{Value, json};

    #[test]
    fn every_word_is_clicked_when_no_indices() {
        let mut store = Store::in_memory();
        let result = read_passage(
            "The unhappy reader — unhappy again.",
            &[],
            None,
            &HeuristicSegmenter::default(),
            &OfflineService,
            &mut store,
        );

        assert_eq!(result.tokens.len(), 6);
        assert_eq!(result.lookups.len(), 5);
        assert_eq!(
            result.added_to_tray,
            vec!["The", "unhappy", "reader", "again"]
        );
        assert_eq!(store.tray_words().len(), 4);
    }

    struct Meanings;

    impl AnalysisService for Meanings {
        fn analyze(&self, word: &str, analysis_type: AnalysisType) -> Result<Value, ServiceError> {
            match analysis_type {
                AnalysisType::Morphemes => Ok(json!([
                    {"morpheme": "re", "type": "prefix"},
                    {"morpheme": "read", "type": "root"}
                ])),
                _ => Ok(json!({"meaning": format!("meaning of {word}")})),
            }
        }
    }

    #[test]
    fn details_are_attached_when_requested() {
        let mut store = Store::in_memory();
        let result = read_passage(
            "reread it",
            &[0],
            Some(AnalysisType::Meaning),
            &HeuristicSegmenter::default(),
            &Meanings,
            &mut store,
        );

        let lookup = &result.lookups[0];
        assert_eq!(lookup.fragments.len(), 2);
        assert_eq!(
            lookup.details.as_ref().and_then(|d| d.meaning.as_deref()),
            Some("meaning of reread")
        );
    }

    #[test]
    fn selected_indices_only() {
        let mut store = Store::in_memory();
        store.add_tray_word("Unhappy");
        let result = read_passage(
            "so unhappy today",
            &[1, 7],
            Some(AnalysisType::Meaning),
            &HeuristicSegmenter::default(),
            &OfflineService,
            &mut store,
        );

        assert_eq!(result.lookups.len(), 1);
        let lookup = &result.lookups[0];
        assert_eq!(lookup.word, "unhappy");
        assert_eq!(lookup.fragments.len(), 2);
        assert_eq!(lookup.error, Some(ServiceError::Unavailable));
        assert!(lookup.details.is_none());
        assert!(result.added_to_tray.is_empty());
    }
}

//! Segment a single word
//!
//! Mirrors what a click does while reading: the heuristic guess first, then
//! the remote fragments aligned to the word and merged in.

use crate::core::Fragment;
use crate::reader::clean_word;
use crate::segment::{HeuristicSegmenter, align, merge};
use crate::service::{AnalysisService, ServiceError};

/// Every stage of a segmentation lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentResult {
    pub word: String,
    pub heuristic: Vec<Fragment>,
    /// Remote fragments after alignment, if the service answered
    pub aligned: Option<Vec<Fragment>>,
    pub error: Option<ServiceError>,
    /// What would be displayed
    pub merged: Vec<Fragment>,
}

/// Segment `word` with the heuristic and, when reachable, the service
///
/// # Errors
///
/// Returns an error if `word` has no letters or digits.
pub fn segment_word<S>(
    word: &str,
    segmenter: &HeuristicSegmenter,
    service: &S,
) -> Result<SegmentResult, String>
where
    S: AnalysisService + ?Sized,
{
    let word = clean_word(word);
    if word.is_empty() {
        return Err("Nothing to segment".to_string());
    }

    let heuristic = segmenter.segment(word);
    let mut merged = merge(Vec::new(), heuristic.clone());

    let (aligned, error) = match service.morphemes(word) {
        Ok(fragments) => {
            let aligned = align(word, &fragments);
            merged = merge(merged, aligned.clone());
            (Some(aligned), None)
        }
        Err(e) => (None, Some(e)),
    };

    Ok(SegmentResult {
        word: word.to_string(),
        heuristic,
        aligned,
        error,
        merged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::joined_text;
    use crate::service::{AnalysisType, OfflineService};
    use serde_json::{Value, json};

    struct Fixed(Value);

    impl AnalysisService for Fixed {
        fn analyze(&self, _word: &str, _t: AnalysisType) -> Result<Value, ServiceError> {
            Ok(self.0.clone())
        }
    }

    fn texts(frags: &[Fragment]) -> Vec<&str> {
        frags.iter().map(Fragment::text).collect()
    }

    #[test]
    fn offline_uses_heuristic_only() {
        let result =
            segment_word("Unhelpful,", &HeuristicSegmenter::default(), &OfflineService).unwrap();
        assert_eq!(result.word, "Unhelpful");
        assert_eq!(texts(&result.merged), vec!["Un", "help", "ful"]);
        assert_eq!(result.error, Some(ServiceError::Unavailable));
        assert!(result.aligned.is_none());
    }

    #[test]
    fn equal_part_count_keeps_guess() {
        let service = Fixed(json!({"morphemes": [
            {"morpheme": "re", "type": "prefix"},
            {"morpheme": "construct", "type": "root"},
            {"morpheme": "ion", "type": "suffix"},
        ]}));
        // "tion" outranks "ion", so the guess differs from the service
        let result =
            segment_word("reconstruction", &HeuristicSegmenter::default(), &service).unwrap();
        assert_eq!(texts(&result.heuristic), vec!["re", "construc", "tion"]);
        assert_eq!(texts(&result.merged), vec!["re", "construc", "tion"]);
        assert_eq!(joined_text(&result.merged), "reconstruction");
    }

    #[test]
    fn remote_result_with_more_parts_replaces_guess() {
        let service = Fixed(json!([
            {"morpheme": "dis", "type": "prefix"},
            {"morpheme": "establish", "type": "root"},
            {"morpheme": "ment", "type": "suffix"},
            {"morpheme": "arian", "type": "suffix"},
        ]));
        let result = segment_word(
            "disestablishmentarian",
            &HeuristicSegmenter::default(),
            &service,
        )
        .unwrap();
        assert_eq!(result.heuristic.len(), 2);
        assert_eq!(
            texts(&result.merged),
            vec!["dis", "establish", "ment", "arian"]
        );
    }

    #[test]
    fn punctuation_is_not_a_word() {
        assert!(segment_word("...", &HeuristicSegmenter::default(), &OfflineService).is_err());
    }
}

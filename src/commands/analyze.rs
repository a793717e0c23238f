//! Word analysis command
//!
//! Runs one analysis type against the service and keeps both the raw JSON
//! and the fields the terminal knows how to display.

use crate::core::Fragment;
use crate::reader::clean_word;
use crate::segment::align;
use crate::service::{AnalysisDetails, AnalysisService, AnalysisType, ServiceError, normalize};
use serde_json::Value;

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResult {
    pub word: String,
    pub analysis_type: AnalysisType,
    /// Aligned fragments, for morpheme analyses
    pub fragments: Option<Vec<Fragment>>,
    pub details: AnalysisDetails,
    pub raw: Value,
}

/// Analyze `word` with the requested analysis type
///
/// # Errors
///
/// Returns `ServiceError` if the request fails or a morpheme response has
/// an unrecognized shape.
pub fn analyze_word<S>(
    word: &str,
    analysis_type: AnalysisType,
    service: &S,
) -> Result<AnalyzeResult, ServiceError>
where
    S: AnalysisService + ?Sized,
{
    let word = clean_word(word);
    let raw = service.analyze(word, analysis_type)?;

    let fragments = match analysis_type {
        AnalysisType::Morphemes => Some(align(word, &normalize(&raw)?)),
        _ => None,
    };

    Ok(AnalyzeResult {
        word: word.to_string(),
        analysis_type,
        fragments,
        details: AnalysisDetails::from_value(&raw),
        raw,
    })
}

//! Remote word-analysis service
//!
//! The service is an external collaborator: word + analysis type in,
//! structured JSON out. `AnalysisService` is the seam; `HttpAnalysisService`
//! talks to the real backend and tests substitute in-memory fakes.

mod http;
mod response;

pub use http::{DEFAULT_API_URL, HttpAnalysisService};
pub use response::{
    AnalysisDetails, LegacyPart, MorphemeResponse, NormalizeError, RawMorpheme, normalize,
};

use crate::core::Fragment;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Generic message shown to users for any analysis failure
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze word. Please try again.";

/// Kind of analysis requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Morphemes,
    Meaning,
    Etymology,
    Graphemes,
    Relatives,
}

impl AnalysisType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morphemes => "morphemes",
            Self::Meaning => "meaning",
            Self::Etymology => "etymology",
            Self::Graphemes => "graphemes",
            Self::Relatives => "relatives",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for the analysis endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest<'a> {
    pub word: &'a str,
    pub analysis_type: AnalysisType,
}

/// Errors surfaced by the analysis service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered with a non-success status
    Status(u16),
    /// The request never completed
    Network(String),
    /// The body was not valid JSON
    Decode(String),
    /// The JSON did not describe morphemes
    Normalize(NormalizeError),
    /// The client was configured without a service (offline mode)
    Unavailable,
}

impl ServiceError {
    /// Message suitable for end users, identical for every failure kind
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP error! status: {code}"),
            Self::Network(msg) => write!(f, "Request failed: {msg}"),
            Self::Decode(msg) => write!(f, "Invalid response body: {msg}"),
            Self::Normalize(err) => write!(f, "{err}"),
            Self::Unavailable => write!(f, "Analysis service not configured"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<NormalizeError> for ServiceError {
    fn from(err: NormalizeError) -> Self {
        Self::Normalize(err)
    }
}

/// Something that can analyze words
///
/// Implementations must be shareable across threads: queue preparation
/// issues one request per word in parallel.
pub trait AnalysisService: Sync {
    /// Run one analysis and return the raw JSON response
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on transport, status or decoding failures.
    fn analyze(&self, word: &str, analysis_type: AnalysisType) -> Result<Value, ServiceError>;

    /// Fetch and normalize the morpheme breakdown of `word`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the request fails or the response matches
    /// no known morpheme shape.
    fn morphemes(&self, word: &str) -> Result<Vec<Fragment>, ServiceError> {
        let value = self.analyze(word, AnalysisType::Morphemes)?;
        Ok(normalize(&value)?)
    }
}

/// Service used when running offline: every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

impl AnalysisService for OfflineService {
    fn analyze(&self, _word: &str, _analysis_type: AnalysisType) -> Result<Value, ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

impl<S: AnalysisService + ?Sized> AnalysisService for &S {
    fn analyze(&self, word: &str, analysis_type: AnalysisType) -> Result<Value, ServiceError> {
        (**self).analyze(word, analysis_type)
    }
}

impl<S: AnalysisService + ?Sized + Send> AnalysisService for Box<S> {
    fn analyze(&self, word: &str, analysis_type: AnalysisType) -> Result<Value, ServiceError> {
        (**self).analyze(word, analysis_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Canned(Value);

    impl AnalysisService for Canned {
        fn analyze(&self, _word: &str, _kind: AnalysisType) -> Result<Value, ServiceError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn request_serializes_analysis_type_lowercase() {
        let req = AnalysisRequest {
            word: "unhappy",
            analysis_type: AnalysisType::Etymology,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"word": "unhappy", "analysis_type": "etymology"})
        );
    }

    #[test]
    fn morphemes_normalizes_response() {
        let service = Canned(json!({"morphemes": [{"morpheme": "un", "type": "prefix"}]}));
        let fragments = service.morphemes("unhappy").unwrap();
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn morphemes_surfaces_shape_errors() {
        let service = Canned(json!({"error": "boom"}));
        assert_eq!(
            service.morphemes("x"),
            Err(ServiceError::Normalize(NormalizeError::UnrecognizedShape))
        );
    }

    #[test]
    fn offline_always_fails_with_generic_message() {
        let err = OfflineService.morphemes("word").unwrap_err();
        assert_eq!(err, ServiceError::Unavailable);
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
    }
}

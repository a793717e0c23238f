//! Blocking HTTP client for the analysis backend

use super::{AnalysisRequest, AnalysisService, AnalysisType, ServiceError};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Default base URL of the analysis backend
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Analysis service reached over HTTP
///
/// `POST {base}/analyze-morpheme` with `{word, analysis_type}`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
}

impl HttpAnalysisService {
    /// Create a client for the backend at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe `GET {base}/health`
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the backend is unreachable or unhealthy.
    pub fn health(&self) -> Result<Value, ServiceError> {
        let response = self.client.get(self.endpoint("/health")).send()?;
        decode(response)
    }
}

impl AnalysisService for HttpAnalysisService {
    fn analyze(&self, word: &str, analysis_type: AnalysisType) -> Result<Value, ServiceError> {
        log::debug!("analyze '{word}' ({analysis_type}) via {}", self.base_url);

        let response = self
            .client
            .post(self.endpoint("/analyze-morpheme"))
            .json(&AnalysisRequest {
                word,
                analysis_type,
            })
            .send()
            .inspect_err(|e| log::error!("API request failed: {e}"))?;

        decode(response)
    }
}

fn decode(response: reqwest::blocking::Response) -> Result<Value, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        log::error!("API request failed: HTTP {status}");
        return Err(ServiceError::Status(status.as_u16()));
    }
    Ok(response.json::<Value>()?)
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(err.to_string())
        }
    }
}

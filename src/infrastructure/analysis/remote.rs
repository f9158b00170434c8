//! Remote emotion analysis service adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Analyzer, AnalyzerError};
use crate::domain::analysis::{AnalysisResult, AudioClip, AudioSource, Confidence, Emotion};

/// Path of the analysis endpoint, appended to the configured base URL
const ANALYZE_PATH: &str = "/v1/analyze";

// Request and response types for the analysis service

#[derive(Debug, Serialize)]
struct AnalyzeRequest {
    /// Base64-encoded audio bytes
    audio: String,
    mime_type: String,
    source: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    emotion: String,
    confidence: u8,
    recommendation: String,
}

/// Analyzer backed by a remote HTTP service
pub struct HttpAnalyzer {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpAnalyzer {
    /// Create an analyzer for the service at `base_url`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the endpoint URL
    fn api_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ANALYZE_PATH)
    }

    /// Build the request body
    fn build_request(clip: &AudioClip, source: AudioSource) -> AnalyzeRequest {
        AnalyzeRequest {
            audio: clip.to_base64(),
            mime_type: clip.mime_type().to_string(),
            source: source.as_str().to_string(),
        }
    }

    /// Validate the wire response into a domain result
    fn parse_result(response: AnalyzeResponse) -> Result<AnalysisResult, AnalyzerError> {
        let emotion: Emotion = response
            .emotion
            .parse()
            .map_err(|e: crate::domain::error::InvalidEmotionError| {
                AnalyzerError::InvalidResponse(e.to_string())
            })?;

        let confidence = Confidence::new(response.confidence)
            .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))?;

        let recommendation = response.recommendation.trim();
        if recommendation.is_empty() {
            return Err(AnalyzerError::InvalidResponse(
                "Recommendation text is empty".to_string(),
            ));
        }

        Ok(AnalysisResult::new(emotion, confidence, recommendation))
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(
        &self,
        clip: &AudioClip,
        source: AudioSource,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let url = self.api_url();
        let body = Self::build_request(clip, source);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalyzerError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AnalyzerError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalyzerError::RateLimited);
        }

        if status.is_server_error() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalyzerError::ServiceUnavailable(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalyzerError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))?;

        Self::parse_result(response)
    }
}

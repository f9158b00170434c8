//! Analysis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::{AnalysisResult, AudioClip, AudioSource};

/// Analysis errors
#[derive(Debug, Clone, Error)]
pub enum AnalyzerError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Analysis service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    #[error("Audio processing failed: {0}")]
    ProcessingFailed(String),
}

/// Port for emotion analysis
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze an audio clip and produce an emotion result.
    ///
    /// # Arguments
    /// * `clip` - The audio to analyze
    /// * `source` - Where the audio came from
    ///
    /// # Returns
    /// The analysis result or an error
    async fn analyze(
        &self,
        clip: &AudioClip,
        source: AudioSource,
    ) -> Result<AnalysisResult, AnalyzerError>;
}

/// Blanket implementation for boxed analyzer types
#[async_trait]
impl Analyzer for Box<dyn Analyzer> {
    async fn analyze(
        &self,
        clip: &AudioClip,
        source: AudioSource,
    ) -> Result<AnalysisResult, AnalyzerError> {
        self.as_ref().analyze(clip, source).await
    }
}

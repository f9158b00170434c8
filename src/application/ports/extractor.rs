//! Video audio extraction port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AudioClip;
use crate::domain::recording::Duration;

/// Extraction errors
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Failed to load video file: {0}")]
    LoadFailed(String),

    #[error("ffmpeg not found. Please install ffmpeg to analyze video files.")]
    FfmpegNotFound,

    #[error("Extraction timed out after {0}")]
    Timeout(Duration),

    #[error("Video contains no audio track")]
    EmptyAudio,

    #[error("Failed to read extracted audio: {0}")]
    ReadFailed(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Port for pulling the audio track out of a video file
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Extract the audio track from the video at `path`.
    ///
    /// # Arguments
    /// * `path` - The video file to decode
    /// * `timeout` - Bound on how long the extraction may run
    ///
    /// # Returns
    /// The extracted audio clip or an error
    async fn extract(&self, path: &Path, timeout: Duration) -> Result<AudioClip, ExtractionError>;
}

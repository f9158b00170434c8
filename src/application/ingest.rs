//! Media file ingest use case

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

use crate::domain::analysis::{AudioClip, AudioMimeType, AudioSource, MediaKind};
use crate::domain::recording::Duration;

use super::ports::{AudioExtractor, ExtractionError};

/// Errors from the ingest use case
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}. Supported: audio (wav, mp3, ogg, flac, m4a) or video (mp4, webm, mkv, mov, avi)")]
    UnsupportedFile(String),

    #[error("File contains no data: {0}")]
    EmptyFile(String),

    #[error("Failed to read file: {0}")]
    ReadFailed(String),

    #[error("Audio extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Input parameters for the ingest use case
#[derive(Debug, Clone)]
pub struct IngestInput {
    /// The media file to ingest
    pub path: PathBuf,
    /// Bound on video audio extraction
    pub extraction_timeout: Duration,
}

/// Output from the ingest use case
#[derive(Debug, Clone)]
pub struct IngestOutput {
    /// The audio ready for analysis
    pub clip: AudioClip,
    /// Provenance derived from the media kind
    pub source: AudioSource,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct IngestCallbacks {
    /// Called when video audio extraction starts
    pub on_extraction_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when extraction ends with the extracted size
    pub on_extraction_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Turns a media file path into an audio clip.
/// Audio files are read directly; video files go through the extractor.
pub struct IngestMediaUseCase<X>
where
    X: AudioExtractor,
{
    extractor: X,
}

impl<X> IngestMediaUseCase<X>
where
    X: AudioExtractor,
{
    /// Create a new use case instance
    pub fn new(extractor: X) -> Self {
        Self { extractor }
    }

    /// Execute the ingest workflow
    pub async fn execute(
        &self,
        input: IngestInput,
        callbacks: IngestCallbacks,
    ) -> Result<IngestOutput, IngestError> {
        let display = input.path.display().to_string();

        if let Err(e) = fs::metadata(&input.path).await {
            return Err(match e.kind() {
                io::ErrorKind::NotFound => IngestError::FileNotFound(display),
                _ => IngestError::ReadFailed(e.to_string()),
            });
        }

        let kind = MediaKind::from_path(&input.path)
            .ok_or_else(|| IngestError::UnsupportedFile(display.clone()))?;

        match kind {
            MediaKind::Audio => {
                let data = fs::read(&input.path)
                    .await
                    .map_err(|e| IngestError::ReadFailed(e.to_string()))?;
                if data.is_empty() {
                    return Err(IngestError::EmptyFile(display));
                }

                let mime_type = input
                    .path
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(AudioMimeType::from_extension)
                    .unwrap_or_default();

                Ok(IngestOutput {
                    clip: AudioClip::new(data, mime_type),
                    source: kind.source(),
                })
            }
            MediaKind::Video => {
                if let Some(ref cb) = callbacks.on_extraction_start {
                    cb();
                }

                let clip = self
                    .extractor
                    .extract(&input.path, input.extraction_timeout)
                    .await?;

                if let Some(ref cb) = callbacks.on_extraction_end {
                    cb(&clip.human_readable_size());
                }

                Ok(IngestOutput {
                    clip,
                    source: kind.source(),
                })
            }
        }
    }
}

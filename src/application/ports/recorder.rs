//! Recording port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AudioClip;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecorderError {
    #[error("Microphone access denied: {0}")]
    PermissionDenied(String),

    #[error("No input device available")]
    NoInputDevice,

    #[error("Audio device error: {0}")]
    DeviceError(String),

    #[error("Audio stream error: {0}")]
    StreamError(String),

    #[error("A recording session is already active")]
    AlreadyRecording,

    #[error("Failed to encode captured audio: {0}")]
    EncodingFailed(String),
}

/// Port for microphone capture.
/// A recorder owns at most one active session at a time.
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Acquire the input device and begin buffering audio.
    ///
    /// # Returns
    /// Ok(()) once capture is running, error if the device is
    /// unavailable or a session is already active
    async fn start(&self) -> Result<(), RecorderError>;

    /// Finalize buffering and produce the captured clip.
    ///
    /// # Returns
    /// Ok(Some(clip)) for an active session, Ok(None) when no session
    /// is active (stopping while idle is a no-op)
    async fn stop(&self) -> Result<Option<AudioClip>, RecorderError>;

    /// Discard the active session without producing a clip.
    async fn cancel(&self) -> Result<(), RecorderError>;

    /// Check if currently recording
    fn is_recording(&self) -> bool;

    /// Get elapsed recording time in milliseconds
    fn elapsed_ms(&self) -> u64;
}

//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 1m, 2m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown emotion label is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid emotion: \"{input}\". Valid emotions are: happy, stressed, playful, anxious, content, hungry, sleepy, alert")]
pub struct InvalidEmotionError {
    pub input: String,
}

/// Error when a confidence value falls outside the accepted range
#[derive(Debug, Clone, Error)]
#[error("Confidence {value} is out of range (expected {min}..={max})", min = ConfidenceRangeError::MIN, max = ConfidenceRangeError::MAX)]
pub struct ConfidenceRangeError {
    pub value: u8,
}

impl ConfidenceRangeError {
    pub const MIN: u8 = 75;
    pub const MAX: u8 = 95;
}

/// Error when an unknown audio source label is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid audio source: \"{input}\". Valid sources are: live, upload, video")]
pub struct InvalidSourceError {
    pub input: String,
}

/// Error when an unknown analyzer backend is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid analyzer backend: \"{input}\". Valid backends are: stub, remote")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

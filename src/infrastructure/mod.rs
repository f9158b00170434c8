//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like cpal, FFmpeg and the
//! hosted analysis service.

pub mod analysis;
pub mod config;
pub mod extraction;
pub mod recording;

// Re-export adapters
pub use analysis::{HttpAnalyzer, StubAnalyzer};
pub use config::XdgConfigStore;
pub use extraction::FfmpegExtractor;
pub use recording::{create_recorder, CpalRecorder};

//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod analyzer;
pub mod config;
pub mod extractor;
pub mod recorder;

// Re-export common types
pub use analyzer::{Analyzer, AnalyzerError};
pub use config::ConfigStore;
pub use extractor::{AudioExtractor, ExtractionError};
pub use recorder::{Recorder, RecorderError};

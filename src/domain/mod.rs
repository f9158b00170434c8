//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod analysis;
pub mod config;
pub mod error;
pub mod history;
pub mod pets;
pub mod recording;

// Re-export common types
pub use analysis::{AnalysisResult, AudioClip, AudioMimeType, AudioSource, Confidence, Emotion};
pub use config::{AnalyzerBackend, AppConfig};
pub use error::*;
pub use history::{EmotionHistoryEntry, EmotionLog};
pub use pets::{Pet, PetRegistry};
pub use recording::{CaptureSession, Duration, SessionState};

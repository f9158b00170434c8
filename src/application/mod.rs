//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod analyze;
pub mod capture;
pub mod ingest;
pub mod ports;

// Re-export use cases
pub use analyze::{
    AnalyzeCallbacks, AnalyzeClipUseCase, AnalyzeError, AnalyzeInput, AnalyzeOutput,
};
pub use capture::{CaptureCallbacks, CaptureClipUseCase, CaptureError, CaptureInput};
pub use ingest::{IngestCallbacks, IngestError, IngestInput, IngestMediaUseCase, IngestOutput};

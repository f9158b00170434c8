//! Emotion analysis infrastructure module
//!
//! Two analyzer backends: a canned stub for local use and an HTTP
//! adapter for the hosted analysis service.

mod remote;
mod stub;

pub use remote::HttpAnalyzer;
pub use stub::StubAnalyzer;

//! Recording domain module

mod duration;
mod session;

pub use duration::{Duration, DEFAULT_EXTRACTION_TIMEOUT_SECS, DEFAULT_RECORDING_CAP_SECS};
pub use session::{CaptureSession, InvalidStateTransition, SessionState};

//! Recording infrastructure module
//!
//! Provides cross-platform microphone capture using cpal. Clips are
//! encoded in memory as mono 16-bit WAV.

mod cpal_recorder;

pub use cpal_recorder::CpalRecorder;

/// Create the default recorder for the current platform
pub fn create_recorder() -> CpalRecorder {
    CpalRecorder::new()
}

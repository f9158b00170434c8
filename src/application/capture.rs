//! Live capture use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration as StdDuration;

use thiserror::Error;

use crate::domain::analysis::AudioClip;
use crate::domain::recording::Duration;

use super::ports::{Recorder, RecorderError};

/// How often the capture loop samples elapsed time
const TICK_INTERVAL_MS: u64 = 100;

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Recording failed: {0}")]
    Recording(#[from] RecorderError),

    #[error("Recording produced no audio")]
    NothingCaptured,
}

/// Input parameters for the capture use case
#[derive(Debug, Clone)]
pub struct CaptureInput {
    /// Longest the recording may run before it is stopped
    pub cap: Duration,
}

impl Default for CaptureInput {
    fn default() -> Self {
        Self {
            cap: Duration::default_recording_cap(),
        }
    }
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct CaptureCallbacks {
    /// Called when recording starts
    pub on_recording_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called on each tick with (elapsed_ms, cap_ms)
    pub on_tick: Option<Box<dyn Fn(u64, u64) + Send + Sync>>,
    /// Called when recording ends with the clip size
    pub on_recording_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Records one clip from the microphone, stopping when the cap
/// elapses or the stop flag is raised, whichever comes first.
pub struct CaptureClipUseCase<R>
where
    R: Recorder,
{
    recorder: R,
    stop_flag: Arc<AtomicBool>,
}

impl<R> CaptureClipUseCase<R>
where
    R: Recorder,
{
    /// Create a new use case instance
    pub fn new(recorder: R) -> Self {
        Self {
            recorder,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the stop flag for external signal handling
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Signal to stop recording early
    pub fn stop_early(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Execute the capture workflow
    pub async fn execute(
        &self,
        input: CaptureInput,
        callbacks: CaptureCallbacks,
    ) -> Result<AudioClip, CaptureError> {
        // Reset stop flag
        self.stop_flag.store(false, Ordering::SeqCst);

        if let Some(ref cb) = callbacks.on_recording_start {
            cb();
        }

        self.recorder.start().await?;

        let cap_ms = input.cap.as_millis();
        let mut ticker = tokio::time::interval(StdDuration::from_millis(TICK_INTERVAL_MS));

        loop {
            ticker.tick().await;

            let elapsed = self.recorder.elapsed_ms();
            if let Some(ref cb) = callbacks.on_tick {
                cb(elapsed, cap_ms);
            }

            if self.stop_flag.load(Ordering::SeqCst) || elapsed >= cap_ms {
                break;
            }
        }

        // An early stop truncates to whatever was captured so far
        let clip = self
            .recorder
            .stop()
            .await?
            .ok_or(CaptureError::NothingCaptured)?;

        if let Some(ref cb) = callbacks.on_recording_end {
            cb(&clip.human_readable_size());
        }

        Ok(clip)
    }
}

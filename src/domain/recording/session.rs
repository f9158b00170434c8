//! Capture session state machine

use std::fmt;
use thiserror::Error;

/// Capture session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Recording,
    Analyzing,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Analyzing => "analyzing",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: SessionState,
    pub action: String,
}

/// Capture session entity.
/// Tracks one record-then-analyze cycle and remembers the last failure
/// so errors surface as a readable message instead of unwinding.
///
/// State machine:
///   IDLE -> RECORDING (start_recording)
///   RECORDING -> ANALYZING (stop_recording)
///   RECORDING -> IDLE (cancel_recording)
///   ANALYZING -> IDLE (complete_analysis)
///   RECORDING | ANALYZING -> IDLE (fail, message retained)
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: SessionState,
    last_error: Option<String>,
}

impl CaptureSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            last_error: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The message from the most recent failure, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == SessionState::Recording
    }

    /// Check if currently analyzing
    pub fn is_analyzing(&self) -> bool {
        self.state == SessionState::Analyzing
    }

    /// Transition from IDLE to RECORDING. Clears the last error.
    pub fn start_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.last_error = None;
        self.state = SessionState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to ANALYZING
    pub fn stop_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = SessionState::Analyzing;
        Ok(())
    }

    /// Transition from RECORDING to IDLE (discard without analysis)
    pub fn cancel_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "cancel recording".to_string(),
            });
        }
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Transition from ANALYZING to IDLE
    pub fn complete_analysis(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Analyzing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete analysis".to_string(),
            });
        }
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Record a failure and return to IDLE from any active state.
    /// Failing while idle only replaces the stored message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.state = SessionState::Idle;
    }
}

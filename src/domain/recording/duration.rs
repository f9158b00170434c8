//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default live recording cap (10 seconds)
pub const DEFAULT_RECORDING_CAP_SECS: u64 = 10;

/// Default bound on video audio extraction (60 seconds)
pub const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 60;

/// Value object representing a time duration.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Create a Duration from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Duration from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Default live recording cap (10 seconds)
    pub const fn default_recording_cap() -> Self {
        Self::from_secs(DEFAULT_RECORDING_CAP_SECS)
    }

    /// Default extraction timeout (60 seconds)
    pub const fn default_extraction_timeout() -> Self {
        Self::from_secs(DEFAULT_EXTRACTION_TIMEOUT_SECS)
    }

    /// Get duration in seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "30s", "1m", "2m30s", "90s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || DurationParseError { input: s.to_string() };

        if input.is_empty() {
            return Err(invalid());
        }

        let (minutes, rest) = match input.split_once('m') {
            Some((m, rest)) => (m.parse::<u64>().map_err(|_| invalid())?, rest),
            None => (0, input.as_str()),
        };

        let seconds = match rest.strip_suffix('s') {
            Some(sec) if !sec.is_empty() => sec.parse::<u64>().map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
            None if rest.is_empty() => 0,
            None => return Err(invalid()),
        };

        let total_ms = (minutes * 60 + seconds) * 1000;
        if total_ms == 0 {
            return Err(invalid());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_recording_cap()
    }
}

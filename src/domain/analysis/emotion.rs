//! Emotion label and confidence value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{ConfidenceRangeError, InvalidEmotionError};

/// All recognized emotion labels
pub const ALL_EMOTIONS: &[Emotion] = &[
    Emotion::Happy,
    Emotion::Stressed,
    Emotion::Playful,
    Emotion::Anxious,
    Emotion::Content,
    Emotion::Hungry,
    Emotion::Sleepy,
    Emotion::Alert,
];

/// Closed set of emotion labels an analysis can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Stressed,
    Playful,
    Anxious,
    Content,
    Hungry,
    Sleepy,
    Alert,
}

impl Emotion {
    /// Get the canonical label for this emotion
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Stressed => "Stressed",
            Self::Playful => "Playful",
            Self::Anxious => "Anxious",
            Self::Content => "Content",
            Self::Hungry => "Hungry",
            Self::Sleepy => "Sleepy",
            Self::Alert => "Alert",
        }
    }

    /// Whether this emotion indicates the cat may need intervention
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::Stressed | Self::Anxious | Self::Hungry)
    }
}

impl FromStr for Emotion {
    type Err = InvalidEmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "stressed" => Ok(Self::Stressed),
            "playful" => Ok(Self::Playful),
            "anxious" => Ok(Self::Anxious),
            "content" => Ok(Self::Content),
            "hungry" => Ok(Self::Hungry),
            "sleepy" => Ok(Self::Sleepy),
            "alert" => Ok(Self::Alert),
            _ => Err(InvalidEmotionError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confidence percentage bounded to the range the analysis contract allows.
/// Construction outside 75..=95 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: u8 = ConfidenceRangeError::MIN;
    pub const MAX: u8 = ConfidenceRangeError::MAX;

    /// Create a confidence value, validating the range
    pub fn new(value: u8) -> Result<Self, ConfidenceRangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfidenceRangeError { value })
        }
    }

    /// Get the raw percentage
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

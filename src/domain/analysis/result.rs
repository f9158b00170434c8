//! Analysis result value object

use crate::domain::analysis::{Confidence, Emotion};

/// Fixed pool of care recommendations the stub analyzer draws from
pub const RECOMMENDATIONS: &[&str] = &[
    "Your cat is showing positive emotions! Continue with current care routine.",
    "Your cat may need attention. Consider interactive play or treats.",
    "High energy detected! Time for some engaging activities.",
    "Your cat seems calm. This is a good time for gentle bonding.",
    "Some stress indicators detected. Create a quiet, safe space.",
    "Your cat might be hungry. Check their feeding schedule.",
    "Your cat appears tired. Ensure they have a comfortable resting area.",
    "Your cat is very alert. They might be interested in playing or exploring.",
];

/// Outcome of one analysis call. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    emotion: Emotion,
    confidence: Confidence,
    recommendation: String,
}

impl AnalysisResult {
    /// Create a result from already-validated parts
    pub fn new(emotion: Emotion, confidence: Confidence, recommendation: impl Into<String>) -> Self {
        Self {
            emotion,
            confidence,
            recommendation: recommendation.into(),
        }
    }

    /// The detected emotion label
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// The confidence percentage
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// The care recommendation text
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}

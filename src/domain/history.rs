//! Bounded emotion history

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::domain::analysis::{AnalysisResult, AudioSource, Confidence, Emotion};

/// Default number of entries the history keeps
pub const DEFAULT_HISTORY_CAP: usize = 5;

/// An analysis result annotated with provenance metadata
#[derive(Debug, Clone)]
pub struct EmotionHistoryEntry {
    id: Uuid,
    timestamp: DateTime<Local>,
    source: AudioSource,
    result: AnalysisResult,
}

impl EmotionHistoryEntry {
    /// Wrap a fresh analysis result, stamping id and timestamp
    pub fn new(result: AnalysisResult, source: AudioSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Local::now(),
            source,
            result,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp rendered for listings, e.g. "2024-01-15 14:30"
    pub fn formatted_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn source(&self) -> AudioSource {
        self.source
    }

    pub fn emotion(&self) -> Emotion {
        self.result.emotion()
    }

    pub fn confidence(&self) -> Confidence {
        self.result.confidence()
    }

    pub fn recommendation(&self) -> &str {
        self.result.recommendation()
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }
}

/// Recency-bounded list of history entries, most recent first.
/// Recording past the cap drops the oldest entry.
#[derive(Debug, Clone)]
pub struct EmotionLog {
    entries: Vec<EmotionHistoryEntry>,
    cap: usize,
}

impl EmotionLog {
    /// Create a log bounded to `cap` entries (minimum 1)
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Prepend an entry, dropping the oldest past the cap
    pub fn record(&mut self, entry: EmotionHistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.cap);
    }

    /// Entries ordered most recent first
    pub fn entries(&self) -> &[EmotionHistoryEntry] {
        &self.entries
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&EmotionHistoryEntry> {
        self.entries.first()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmotionLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

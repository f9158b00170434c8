//! Analyze clip use case

use std::time::Instant;

use thiserror::Error;

use crate::domain::analysis::{AudioClip, AudioSource};
use crate::domain::history::EmotionHistoryEntry;

use super::ports::{Analyzer, AnalyzerError};

/// Errors from the analyze use case
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalyzerError),

    #[error("Missing inference service configuration. Set EMEOWTIONS_API_KEY or configure via 'emeowtions config set api.key <key>'")]
    MissingApiConfig,
}

/// Input parameters for the analyze use case
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    /// The audio to analyze
    pub clip: AudioClip,
    /// Where the audio came from
    pub source: AudioSource,
}

/// Output from the analyze use case
#[derive(Debug, Clone)]
pub struct AnalyzeOutput {
    /// The result wrapped with provenance, ready for the history
    pub entry: EmotionHistoryEntry,
    /// How long the analysis took in milliseconds
    pub elapsed_ms: u64,
    /// Audio size in human-readable format
    pub audio_size: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct AnalyzeCallbacks {
    /// Called when analysis starts with the source label
    pub on_analysis_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when analysis ends
    pub on_analysis_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Runs one analysis call and stamps the result with provenance
pub struct AnalyzeClipUseCase<A>
where
    A: Analyzer,
{
    analyzer: A,
}

impl<A> AnalyzeClipUseCase<A>
where
    A: Analyzer,
{
    /// Create a new use case instance
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Execute the analysis workflow
    pub async fn execute(
        &self,
        input: AnalyzeInput,
        callbacks: AnalyzeCallbacks,
    ) -> Result<AnalyzeOutput, AnalyzeError> {
        if let Some(ref cb) = callbacks.on_analysis_start {
            cb(input.source.label());
        }

        let audio_size = input.clip.human_readable_size();
        let started = Instant::now();

        let result = self.analyzer.analyze(&input.clip, input.source).await?;

        let elapsed_ms = started.elapsed().as_millis() as u64;

        if let Some(ref cb) = callbacks.on_analysis_end {
            cb();
        }

        Ok(AnalyzeOutput {
            entry: EmotionHistoryEntry::new(result, input.source),
            elapsed_ms,
            audio_size,
        })
    }
}

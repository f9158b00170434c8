//! Canned emotion analyzer
//!
//! Stands in for the real model service. Sleeps to simulate inference
//! latency, then draws an emotion, confidence and recommendation at
//! random from the fixed pools.

use async_trait::async_trait;
use rand::Rng;
use tokio::time::Duration as TokioDuration;

use crate::application::ports::{Analyzer, AnalyzerError};
use crate::domain::analysis::{
    AnalysisResult, AudioClip, AudioSource, Confidence, ALL_EMOTIONS, RECOMMENDATIONS,
};
use crate::domain::config::DEFAULT_STUB_DELAY_MS;

/// Analyzer producing random results from the fixed label pools
pub struct StubAnalyzer {
    delay_ms: u64,
}

impl StubAnalyzer {
    /// Create a stub with the standard simulated latency
    pub fn new() -> Self {
        Self {
            delay_ms: DEFAULT_STUB_DELAY_MS,
        }
    }

    /// Create a stub with a custom simulated latency
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for StubAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for StubAnalyzer {
    async fn analyze(
        &self,
        clip: &AudioClip,
        _source: AudioSource,
    ) -> Result<AnalysisResult, AnalyzerError> {
        if clip.is_empty() {
            return Err(AnalyzerError::ProcessingFailed(
                "Audio clip is empty".to_string(),
            ));
        }

        // Simulated inference latency
        tokio::time::sleep(TokioDuration::from_millis(self.delay_ms)).await;

        // ThreadRng is not Send, keep it out of scope across awaits
        let (emotion, confidence_value, recommendation) = {
            let mut rng = rand::thread_rng();
            (
                ALL_EMOTIONS[rng.gen_range(0..ALL_EMOTIONS.len())],
                rng.gen_range(Confidence::MIN..=Confidence::MAX),
                RECOMMENDATIONS[rng.gen_range(0..RECOMMENDATIONS.len())],
            )
        };

        let confidence = Confidence::new(confidence_value)
            .map_err(|e| AnalyzerError::ProcessingFailed(e.to_string()))?;

        Ok(AnalysisResult::new(emotion, confidence, recommendation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AudioMimeType;

    fn clip() -> AudioClip {
        AudioClip::new(vec![1, 2, 3, 4], AudioMimeType::Wav)
    }

    #[tokio::test]
    async fn produces_values_from_fixed_pools() {
        let analyzer = StubAnalyzer::with_delay(0);

        for _ in 0..20 {
            let result = analyzer.analyze(&clip(), AudioSource::LiveRecording).await.unwrap();

            assert!(ALL_EMOTIONS.contains(&result.emotion()));
            assert!(RECOMMENDATIONS.contains(&result.recommendation()));
            let value = result.confidence().value();
            assert!((Confidence::MIN..=Confidence::MAX).contains(&value));
        }
    }

    #[tokio::test]
    async fn rejects_empty_clip() {
        let analyzer = StubAnalyzer::with_delay(0);
        let empty = AudioClip::new(Vec::new(), AudioMimeType::Wav);

        let err = analyzer
            .analyze(&empty, AudioSource::AudioUpload)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::ProcessingFailed(_)));
    }

    #[tokio::test]
    async fn honors_configured_delay() {
        let analyzer = StubAnalyzer::with_delay(50);
        let started = std::time::Instant::now();

        analyzer
            .analyze(&clip(), AudioSource::VideoAnalysis)
            .await
            .unwrap();

        assert!(started.elapsed().as_millis() >= 50);
    }

    #[test]
    fn default_delay_matches_standard_latency() {
        let analyzer = StubAnalyzer::new();
        assert_eq!(analyzer.delay_ms, DEFAULT_STUB_DELAY_MS);
    }
}

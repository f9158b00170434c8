//! Ingest-and-analyze flow integration tests
//!
//! Audio uploads bypass extraction, so these run without ffmpeg, a
//! microphone, or network access.

use std::io::Write;

use tempfile::NamedTempFile;

use emeowtions::application::{
    AnalyzeCallbacks, AnalyzeClipUseCase, AnalyzeInput, IngestCallbacks, IngestInput,
    IngestMediaUseCase,
};
use emeowtions::domain::analysis::{AudioMimeType, AudioSource, ALL_EMOTIONS, RECOMMENDATIONS};
use emeowtions::domain::history::EmotionLog;
use emeowtions::domain::recording::Duration;
use emeowtions::infrastructure::{FfmpegExtractor, StubAnalyzer};

fn write_audio_file(suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp audio file");
    // Uploads are passed through verbatim, so any bytes will do
    file.write_all(b"RIFF0000WAVEfmt ")
        .expect("write temp audio file");
    file
}

#[tokio::test]
async fn audio_upload_is_read_directly() {
    let file = write_audio_file(".wav");

    let ingest = IngestMediaUseCase::new(FfmpegExtractor::new());
    let input = IngestInput {
        path: file.path().to_path_buf(),
        extraction_timeout: Duration::from_secs(60),
    };

    let output = ingest
        .execute(input, IngestCallbacks::default())
        .await
        .expect("ingest should succeed");

    assert_eq!(output.source, AudioSource::AudioUpload);
    assert_eq!(output.clip.mime_type(), AudioMimeType::Wav);
    assert_eq!(output.clip.size_bytes(), 16);
}

#[tokio::test]
async fn mp3_upload_keeps_its_mime_type() {
    let file = write_audio_file(".mp3");

    let ingest = IngestMediaUseCase::new(FfmpegExtractor::new());
    let input = IngestInput {
        path: file.path().to_path_buf(),
        extraction_timeout: Duration::from_secs(60),
    };

    let output = ingest
        .execute(input, IngestCallbacks::default())
        .await
        .expect("ingest should succeed");

    assert_eq!(output.clip.mime_type(), AudioMimeType::Mp3);
}

#[tokio::test]
async fn upload_flows_into_bounded_history() {
    let file = write_audio_file(".wav");

    let ingest = IngestMediaUseCase::new(FfmpegExtractor::new());
    let input = IngestInput {
        path: file.path().to_path_buf(),
        extraction_timeout: Duration::from_secs(60),
    };
    let output = ingest
        .execute(input, IngestCallbacks::default())
        .await
        .expect("ingest should succeed");

    let analyze = AnalyzeClipUseCase::new(StubAnalyzer::with_delay(0));
    let mut log = EmotionLog::new(5);

    for _ in 0..7 {
        let analyzed = analyze
            .execute(
                AnalyzeInput {
                    clip: output.clip.clone(),
                    source: output.source,
                },
                AnalyzeCallbacks::default(),
            )
            .await
            .expect("analysis should succeed");
        log.record(analyzed.entry);
    }

    // The log keeps only the five most recent entries
    assert_eq!(log.len(), 5);

    for entry in log.entries() {
        assert_eq!(entry.source(), AudioSource::AudioUpload);
        assert!(ALL_EMOTIONS.contains(&entry.emotion()));
        assert!(RECOMMENDATIONS.contains(&entry.recommendation()));
        let confidence = entry.confidence().value();
        assert!((75..=95).contains(&confidence));
    }

    // Most recent first
    let stamps: Vec<_> = log.entries().iter().map(|e| e.timestamp()).collect();
    let mut sorted = stamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(stamps, sorted);
}

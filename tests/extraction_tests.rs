//! Video audio extraction integration tests
//!
//! These tests shell out to a real ffmpeg binary.
//! Run with: cargo test --test extraction_tests -- --ignored

use std::io::Write;

use emeowtions::application::ports::{AudioExtractor, ExtractionError};
use emeowtions::domain::recording::Duration;
use emeowtions::infrastructure::FfmpegExtractor;

#[tokio::test]
#[ignore = "requires ffmpeg binary"]
async fn corrupt_video_reports_load_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".mp4")
        .tempfile()
        .expect("create temp video file");
    file.write_all(b"this is not a real mp4 container")
        .expect("write temp video file");

    let extractor = FfmpegExtractor::new();
    let err = extractor
        .extract(file.path(), Duration::from_secs(30))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            ExtractionError::LoadFailed(_) | ExtractionError::ExtractionFailed(_)
        ),
        "Expected a decode failure, got: {:?}",
        err
    );
}

#[tokio::test]
#[ignore = "requires ffmpeg binary"]
async fn missing_input_reports_failure() {
    let extractor = FfmpegExtractor::new();
    let err = extractor
        .extract(
            std::path::Path::new("/nonexistent/meow.mp4"),
            Duration::from_secs(30),
        )
        .await
        .unwrap_err();

    // ffmpeg exits with an error before producing any output
    assert!(
        !matches!(err, ExtractionError::Timeout(_)),
        "Expected a fast failure, got: {:?}",
        err
    );
}

#[tokio::test]
#[ignore = "requires ffmpeg binary"]
async fn tiny_timeout_reports_timeout() {
    let mut file = tempfile::Builder::new()
        .suffix(".mp4")
        .tempfile()
        .expect("create temp video file");
    let _ = file.write_all(&vec![0u8; 1024 * 1024]);

    let extractor = FfmpegExtractor::new();
    let result = extractor
        .extract(file.path(), Duration::from_millis(1))
        .await;

    // Either the timeout fires or ffmpeg rejects the input first;
    // both are acceptable, hanging is not
    assert!(result.is_err());
}

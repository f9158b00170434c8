//! Main app runners for the one-shot modes

use std::env;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::application::ports::{Analyzer, ConfigStore};
use crate::application::{
    AnalyzeCallbacks, AnalyzeClipUseCase, AnalyzeError, AnalyzeInput, CaptureCallbacks,
    CaptureClipUseCase, CaptureInput, IngestCallbacks, IngestInput, IngestMediaUseCase,
};
use crate::domain::analysis::{AudioClip, AudioSource};
use crate::domain::config::{AnalyzerBackend, ApiConfig, AppConfig};
use crate::infrastructure::{create_recorder, FfmpegExtractor, HttpAnalyzer, StubAnalyzer, XdgConfigStore};

use super::args::{AnalyzeOptions, AnalyzerOptions, RecordOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Build the analyzer selected by configuration
pub fn make_analyzer(options: &AnalyzerOptions) -> Result<Box<dyn Analyzer>, AnalyzeError> {
    match options.backend {
        AnalyzerBackend::Stub => Ok(Box::new(StubAnalyzer::with_delay(
            options.stub_delay.as_millis(),
        ))),
        AnalyzerBackend::Remote => {
            let url = options
                .api_url
                .clone()
                .ok_or(AnalyzeError::MissingApiConfig)?;
            let key = options
                .api_key
                .clone()
                .ok_or(AnalyzeError::MissingApiConfig)?;
            Ok(Box::new(HttpAnalyzer::new(url, key)))
        }
    }
}

/// Run one-shot record-and-analyze
pub async fn run_record(options: RecordOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    let analyzer = match make_analyzer(&options.analyzer) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let capture = CaptureClipUseCase::new(create_recorder());

    // Ctrl+C finishes the recording early instead of killing the process
    let stop_flag = capture.stop_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_flag.store(true, Ordering::SeqCst);
        }
    });

    let callbacks = CaptureCallbacks {
        on_recording_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || presenter.start_spinner("Recording... (Ctrl+C to stop early)")
        })),
        on_tick: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move |elapsed, total| presenter.update_recording_progress(elapsed, total)
        })),
        on_recording_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move |size: &str| {
                presenter.spinner_success(&format!("Recording complete ({})", size))
            }
        })),
    };

    let input = CaptureInput { cap: options.cap };
    let clip = match capture.execute(input, callbacks).await {
        Ok(clip) => clip,
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    analyze_and_present(
        &presenter,
        analyzer,
        clip,
        AudioSource::LiveRecording,
        options.pet.as_deref(),
    )
    .await
}

/// Run one-shot analysis of an audio or video file
pub async fn run_analyze(options: AnalyzeOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    let analyzer = match make_analyzer(&options.analyzer) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let ingest = IngestMediaUseCase::new(FfmpegExtractor::new());

    let callbacks = IngestCallbacks {
        on_extraction_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || presenter.start_spinner("Extracting audio track...")
        })),
        on_extraction_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move |size: &str| presenter.spinner_success(&format!("Audio ready ({})", size))
        })),
    };

    let input = IngestInput {
        path: options.file.clone(),
        extraction_timeout: options.extraction_timeout,
    };
    let output = match ingest.execute(input, callbacks).await {
        Ok(output) => output,
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    analyze_and_present(
        &presenter,
        analyzer,
        output.clip,
        output.source,
        options.pet.as_deref(),
    )
    .await
}

/// Analyze a clip and present the result card
async fn analyze_and_present(
    presenter: &Arc<Presenter>,
    analyzer: Box<dyn Analyzer>,
    clip: AudioClip,
    source: AudioSource,
    pet: Option<&str>,
) -> ExitCode {
    let use_case = AnalyzeClipUseCase::new(analyzer);

    let callbacks = AnalyzeCallbacks {
        on_analysis_start: Some(Box::new({
            let presenter = Arc::clone(presenter);
            move |label: &str| presenter.start_spinner(&format!("Analyzing {}...", label))
        })),
        on_analysis_end: Some(Box::new({
            let presenter = Arc::clone(presenter);
            move || presenter.stop_spinner()
        })),
    };

    let input = AnalyzeInput { clip, source };
    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.success(&format!(
                "Analysis complete in {:.1}s ({})",
                output.elapsed_ms as f64 / 1000.0,
                output.audio_size
            ));
            presenter.result_card(&output.entry, pet);
            if output.entry.emotion().needs_attention() {
                presenter.warn("This reading may need your attention");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_api = ApiConfig {
        url: env::var("EMEOWTIONS_API_URL").ok().filter(|s| !s.is_empty()),
        key: env::var("EMEOWTIONS_API_KEY").ok().filter(|s| !s.is_empty()),
    };
    let env_config = AppConfig {
        api: (env_api.url.is_some() || env_api.key.is_some()).then_some(env_api),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Resolve analyzer options from a merged config
pub fn analyzer_options(config: &AppConfig) -> AnalyzerOptions {
    AnalyzerOptions {
        backend: config.backend_or_default(),
        stub_delay: config.stub_delay_or_default(),
        api_url: config.api_url().map(str::to_string),
        api_key: config.api_key().map(str::to_string),
    }
}

//! Emeowtions CLI entry point

use std::process::ExitCode;

use clap::Parser;

use emeowtions::cli::{
    app::{
        analyzer_options, load_merged_config, run_analyze, run_record, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    session_app::run_session,
    AnalyzeOptions, RecordOptions, SessionOptions,
};
use emeowtions::domain::config::{AnalyzerBackend, AppConfig};
use emeowtions::domain::recording::Duration;
use emeowtions::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        backend: cli.backend.map(|b| AnalyzerBackend::from(b).to_string()),
        duration: cli.duration.clone(),
        pet: cli.pet.clone(),
        ..Default::default()
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Parse recording cap
    let cap = match config.duration.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => d,
            Err(e) => {
                presenter.error(&format!("Invalid duration: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Duration::default_recording_cap(),
    };

    // Parse extraction timeout
    let extraction_timeout = match config.extraction_timeout.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => d,
            Err(e) => {
                presenter.error(&format!("Invalid extraction_timeout: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Duration::default_extraction_timeout(),
    };

    let analyzer = analyzer_options(&config);
    let pet = config.pet.clone();

    // Route to the appropriate runner
    if let Some(file) = cli.file {
        let options = AnalyzeOptions {
            file,
            extraction_timeout,
            pet,
            analyzer,
        };
        run_analyze(options).await
    } else if cli.session {
        let options = SessionOptions {
            cap,
            extraction_timeout,
            history_cap: config.history_cap_or_default(),
            pet,
            analyzer,
        };
        run_session(options).await
    } else {
        let options = RecordOptions { cap, pet, analyzer };
        run_record(options).await
    }
}

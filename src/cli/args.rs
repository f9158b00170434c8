//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::AnalyzerBackend;
use crate::domain::recording::Duration;

/// Emeowtions - cat emotion analysis from sound
#[derive(Parser, Debug)]
#[command(name = "emeowtions")]
#[command(version)]
#[command(about = "Analyze your cat's emotions from live recordings and media files")]
#[command(long_about = None)]
pub struct Cli {
    /// Max recording duration (e.g., 10s, 30s, 1m)
    #[arg(short = 'd', long, value_name = "TIME", conflicts_with = "file")]
    pub duration: Option<String>,

    /// Analyzer backend (stub or remote)
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Pet profile the analysis belongs to
    #[arg(short = 'p', long, value_name = "NAME")]
    pub pet: Option<String>,

    /// Analyze an audio or video file instead of recording
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "session")]
    pub file: Option<PathBuf>,

    /// Run an interactive session (record, analyze, history, pets)
    #[arg(long)]
    pub session: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Stub,
    Remote,
}

impl From<BackendArg> for AnalyzerBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Stub => AnalyzerBackend::Stub,
            BackendArg::Remote => AnalyzerBackend::Remote,
        }
    }
}

impl From<AnalyzerBackend> for BackendArg {
    fn from(backend: AnalyzerBackend) -> Self {
        match backend {
            AnalyzerBackend::Stub => BackendArg::Stub,
            AnalyzerBackend::Remote => BackendArg::Remote,
        }
    }
}

/// Parsed analyzer selection shared by every mode
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub backend: AnalyzerBackend,
    pub stub_delay: Duration,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

/// Parsed record options (oneshot mode)
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub cap: Duration,
    pub pet: Option<String>,
    pub analyzer: AnalyzerOptions,
}

/// Parsed file analysis options
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub file: PathBuf,
    pub extraction_timeout: Duration,
    pub pet: Option<String>,
    pub analyzer: AnalyzerOptions,
}

/// Parsed interactive session options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub cap: Duration,
    pub extraction_timeout: Duration,
    pub history_cap: usize,
    pub pet: Option<String>,
    pub analyzer: AnalyzerOptions,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "backend",
    "duration",
    "extraction_timeout",
    "history_cap",
    "stub_delay_ms",
    "pet",
    "api.url",
    "api.key",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

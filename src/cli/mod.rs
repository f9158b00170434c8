//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the main
//! application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod session_app;

// Re-export commonly used types
pub use app::{run_analyze, run_record, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{
    AnalyzeOptions, AnalyzerOptions, Cli, Commands, ConfigAction, RecordOptions, SessionOptions,
};
pub use presenter::Presenter;
pub use session_app::run_session;

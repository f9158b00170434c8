//! Configuration domain module

mod app_config;

pub use app_config::{AnalyzerBackend, ApiConfig, AppConfig, DEFAULT_STUB_DELAY_MS};

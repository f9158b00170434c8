//! Application configuration value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidBackendError;
use crate::domain::history::DEFAULT_HISTORY_CAP;
use crate::domain::recording::Duration;

/// Default simulated inference latency for the stub backend
pub const DEFAULT_STUB_DELAY_MS: u64 = 2000;

/// Which analyzer implementation serves analysis calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyzerBackend {
    #[default]
    Stub,
    Remote,
}

impl AnalyzerBackend {
    /// Get the string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stub => "stub",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for AnalyzerBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            "remote" => Ok(Self::Remote),
            _ => Err(InvalidBackendError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for AnalyzerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inference service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub key: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub duration: Option<String>,
    pub extraction_timeout: Option<String>,
    pub history_cap: Option<usize>,
    pub stub_delay_ms: Option<u64>,
    pub pet: Option<String>,
    pub api: Option<ApiConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some("stub".to_string()),
            duration: Some("10s".to_string()),
            extraction_timeout: Some("60s".to_string()),
            history_cap: Some(DEFAULT_HISTORY_CAP),
            stub_delay_ms: Some(DEFAULT_STUB_DELAY_MS),
            pet: None,
            api: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            duration: other.duration.or(self.duration),
            extraction_timeout: other.extraction_timeout.or(self.extraction_timeout),
            history_cap: other.history_cap.or(self.history_cap),
            stub_delay_ms: other.stub_delay_ms.or(self.stub_delay_ms),
            pet: other.pet.or(self.pet),
            api: Self::merge_api_config(self.api, other.api),
        }
    }

    /// Merge API config sections
    fn merge_api_config(base: Option<ApiConfig>, other: Option<ApiConfig>) -> Option<ApiConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(ApiConfig {
                url: o.url.or(b.url),
                key: o.key.or(b.key),
            }),
        }
    }

    /// Get backend as parsed AnalyzerBackend, or stub if not set/invalid
    pub fn backend_or_default(&self) -> AnalyzerBackend {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the recording cap as parsed Duration, or default if not set/invalid
    pub fn duration_or_default(&self) -> Duration {
        self.duration
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_recording_cap)
    }

    /// Get the extraction timeout as parsed Duration, or default if not set/invalid
    pub fn extraction_timeout_or_default(&self) -> Duration {
        self.extraction_timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_extraction_timeout)
    }

    /// Get the history cap, or 5 if not set
    pub fn history_cap_or_default(&self) -> usize {
        self.history_cap.unwrap_or(DEFAULT_HISTORY_CAP)
    }

    /// Get the stub latency, or 2000 ms if not set
    pub fn stub_delay_or_default(&self) -> Duration {
        Duration::from_millis(self.stub_delay_ms.unwrap_or(DEFAULT_STUB_DELAY_MS))
    }

    /// Get the inference endpoint URL, if configured
    pub fn api_url(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.url.as_deref())
    }

    /// Get the inference API key, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.key.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.backend, Some("stub".to_string()));
        assert_eq!(config.duration, Some("10s".to_string()));
        assert_eq!(config.extraction_timeout, Some("60s".to_string()));
        assert_eq!(config.history_cap, Some(5));
        assert_eq!(config.stub_delay_ms, Some(2000));
        assert!(config.pet.is_none());
        assert!(config.api.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.backend.is_none());
        assert!(config.duration.is_none());
        assert!(config.history_cap.is_none());
        assert!(config.api.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            backend: Some("stub".to_string()),
            duration: Some("10s".to_string()),
            pet: Some("Whiskers".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            backend: Some("remote".to_string()),
            duration: None, // Should not override
            pet: Some("Shadow".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.backend, Some("remote".to_string()));
        assert_eq!(merged.duration, Some("10s".to_string())); // Kept from base
        assert_eq!(merged.pet, Some("Shadow".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            history_cap: Some(8),
            stub_delay_ms: Some(100),
            ..Default::default()
        };

        let other = AppConfig::empty();
        let merged = base.merge(other);

        assert_eq!(merged.history_cap, Some(8));
        assert_eq!(merged.stub_delay_ms, Some(100));
    }

    #[test]
    fn merge_api_sections() {
        let base = AppConfig {
            api: Some(ApiConfig {
                url: Some("https://base.example".to_string()),
                key: Some("base-key".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            api: Some(ApiConfig {
                url: None,
                key: Some("other-key".to_string()),
            }),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.api_url(), Some("https://base.example"));
        assert_eq!(merged.api_key(), Some("other-key"));
    }

    #[test]
    fn merge_api_preserves_base() {
        let base = AppConfig {
            api: Some(ApiConfig {
                url: Some("https://base.example".to_string()),
                key: None,
            }),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.api_url(), Some("https://base.example"));
    }

    #[test]
    fn backend_or_default_parses() {
        let config = AppConfig {
            backend: Some("remote".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), AnalyzerBackend::Remote);
    }

    #[test]
    fn backend_or_default_uses_stub_on_invalid() {
        let config = AppConfig {
            backend: Some("quantum".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), AnalyzerBackend::Stub);
    }

    #[test]
    fn backend_parse_roundtrip() {
        assert_eq!("stub".parse::<AnalyzerBackend>().unwrap(), AnalyzerBackend::Stub);
        assert_eq!("REMOTE".parse::<AnalyzerBackend>().unwrap(), AnalyzerBackend::Remote);
        assert!("local".parse::<AnalyzerBackend>().is_err());
    }

    #[test]
    fn duration_or_default_parses() {
        let config = AppConfig {
            duration: Some("30s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.duration_or_default().as_secs(), 30);
    }

    #[test]
    fn duration_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            duration: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.duration_or_default().as_secs(), 10);
    }

    #[test]
    fn extraction_timeout_default_is_sixty_secs() {
        let config = AppConfig::empty();
        assert_eq!(config.extraction_timeout_or_default().as_secs(), 60);
    }

    #[test]
    fn history_cap_default_is_five() {
        assert_eq!(AppConfig::empty().history_cap_or_default(), 5);
    }

    #[test]
    fn stub_delay_default_is_two_seconds() {
        assert_eq!(AppConfig::empty().stub_delay_or_default().as_millis(), 2000);
    }

    #[test]
    fn api_accessors_none_without_section() {
        let config = AppConfig::empty();
        assert!(config.api_url().is_none());
        assert!(config.api_key().is_none());
    }
}

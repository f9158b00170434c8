//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AnalyzerBackend, ApiConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "backend" => config.backend = Some(value.to_lowercase()),
        "duration" => config.duration = Some(value.to_string()),
        "extraction_timeout" => config.extraction_timeout = Some(value.to_string()),
        "history_cap" => {
            config.history_cap =
                Some(
                    value
                        .parse::<usize>()
                        .map_err(|e| ConfigError::ValidationError {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                )
        }
        "stub_delay_ms" => {
            config.stub_delay_ms =
                Some(
                    value
                        .parse::<u64>()
                        .map_err(|e| ConfigError::ValidationError {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                )
        }
        "pet" => config.pet = Some(value.to_string()),
        "api.url" => {
            // Initialize api section if None
            if config.api.is_none() {
                config.api = Some(ApiConfig::default());
            }
            if let Some(ref mut api) = config.api {
                api.url = Some(value.to_string());
            }
        }
        "api.key" => {
            if config.api.is_none() {
                config.api = Some(ApiConfig::default());
            }
            if let Some(ref mut api) = config.api {
                api.key = Some(value.to_string());
            }
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    if key == "api.key" {
        presenter.success(&format!("{} = {}", key, mask_api_key(value)));
    } else {
        presenter.success(&format!("{} = {}", key, value));
    }

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "backend" => config.backend,
        "duration" => config.duration,
        "extraction_timeout" => config.extraction_timeout,
        "history_cap" => config.history_cap.map(|n| n.to_string()),
        "stub_delay_ms" => config.stub_delay_ms.map(|n| n.to_string()),
        "pet" => config.pet,
        "api.url" => config.api.as_ref().and_then(|a| a.url.clone()),
        "api.key" => config
            .api
            .as_ref()
            .and_then(|a| a.key.as_deref())
            .map(mask_api_key),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("backend", config.backend.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "duration",
        config.duration.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "extraction_timeout",
        config.extraction_timeout.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "history_cap",
        &config
            .history_cap
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "stub_delay_ms",
        &config
            .stub_delay_ms
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("pet", config.pet.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "api.url",
        config
            .api
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .unwrap_or("(not set)"),
    );
    presenter.key_value(
        "api.key",
        &config
            .api
            .as_ref()
            .and_then(|a| a.key.as_deref())
            .map(mask_api_key)
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "backend" => {
            value
                .parse::<AnalyzerBackend>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "duration" | "extraction_timeout" => {
            value
                .parse::<crate::domain::recording::Duration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "history_cap" => {
            let cap = value
                .parse::<usize>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a positive integer".to_string(),
                })?;
            if cap == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "History cap must be at least 1".to_string(),
                });
            }
        }
        "stub_delay_ms" => {
            value
                .parse::<u64>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a non-negative integer".to_string(),
                })?;
        }
        "pet" | "api.url" | "api.key" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        "*".repeat(key.len())
    } else {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    }
}

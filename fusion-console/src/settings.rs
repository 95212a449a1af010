//! Console settings persistence.
//!
//! Settings live in `settings.json` inside the data directory:
//! 1. `FUSION_DATA_DIR` environment variable
//! 2. `~/.fusion_alpha`

use std::fs;
use std::path::{Path, PathBuf};

use fusion_types::models::{DEFAULT_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS};
use fusion_types::{ConfigError, ConsoleSettings};

/// Directory name for data storage.
pub const DATA_DIR: &str = ".fusion_alpha";
/// Filename for console settings.
pub const SETTINGS_FILE: &str = "settings.json";

pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = if let Ok(custom_dir) = std::env::var("FUSION_DATA_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::NotFound { path: "~".to_string() })?;
        home.join(DATA_DIR)
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| ConfigError::from_io_error(&e))?;
    }

    Ok(data_dir)
}

pub fn load() -> Result<ConsoleSettings, ConfigError> {
    load_from(&data_dir()?)
}

pub fn save(settings: &ConsoleSettings) -> Result<(), ConfigError> {
    save_to(&data_dir()?, settings)
}

/// Load, modify, validate and save in one step.
pub fn update<F>(updater: F) -> Result<ConsoleSettings, ConfigError>
where
    F: FnOnce(&mut ConsoleSettings),
{
    let dir = data_dir()?;
    let mut settings = load_from(&dir)?;
    updater(&mut settings);
    save_to(&dir, &settings)?;
    Ok(settings)
}

/// Missing file means defaults.
pub fn load_from(dir: &Path) -> Result<ConsoleSettings, ConfigError> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(ConsoleSettings::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| ConfigError::ParseError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    let mut settings: ConsoleSettings =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    // Hand-edited files may carry an unusable address.
    match normalize_api_url(&settings.api_base_url) {
        Ok(url) => settings.api_base_url = url,
        Err(e) => {
            tracing::warn!("Ignoring stored backend address: {}", e);
            settings.api_base_url = ConsoleSettings::default().api_base_url;
        }
    }
    if settings.refresh_interval_ms < MIN_REFRESH_INTERVAL_MS {
        tracing::warn!(
            "Ignoring stored refresh interval {} ms (minimum {} ms)",
            settings.refresh_interval_ms,
            MIN_REFRESH_INTERVAL_MS
        );
        settings.refresh_interval_ms = DEFAULT_REFRESH_INTERVAL_MS;
    }
    Ok(settings)
}

pub fn save_to(dir: &Path, settings: &ConsoleSettings) -> Result<(), ConfigError> {
    validate(settings)?;

    let path = dir.join(SETTINGS_FILE);
    let temp_path = dir.join(format!("{}.tmp", SETTINGS_FILE));
    let content = serde_json::to_string_pretty(settings).map_err(|e| ConfigError::from_json_error(&e))?;

    // Atomic write
    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, &path).map_err(|e| ConfigError::from_io_error(&e))?;
    tracing::debug!("Settings saved to {}", path.display());
    Ok(())
}

pub fn validate(settings: &ConsoleSettings) -> Result<(), ConfigError> {
    normalize_api_url(&settings.api_base_url)?;
    if settings.refresh_interval_ms < MIN_REFRESH_INTERVAL_MS {
        return Err(ConfigError::invalid(
            "refresh_interval_ms",
            format!("must be at least {}", MIN_REFRESH_INTERVAL_MS),
        ));
    }
    Ok(())
}

/// Accept absolute http(s) URLs only; strip trailing slashes.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::invalid("api_base_url", e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::invalid("api_base_url", format!("unsupported scheme: {}", other))),
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::invalid("api_base_url", "missing host"));
    }
    Ok(trimmed.to_string())
}

use outreach_types::{ConfigError, RiskModelConfig};
use std::fs;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{AppError, AppResult};

const DATA_DIR: &str = ".outreach";
const CONFIG_FILE: &str = "risk_model.json";

fn data_dir_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR)
}

/// Tuning file location under a given home directory.
pub fn config_path_in(home: &Path) -> PathBuf {
    data_dir_in(home).join(CONFIG_FILE)
}

/// Default location of the risk model tuning file.
///
/// Only resolves the path; the directory is created by [`save_config`].
pub fn default_config_path() -> AppResult<PathBuf> {
    let home = dirs::home_dir().ok_or("Cannot get home directory")?;
    Ok(config_path_in(&home))
}

/// Load and validate the risk model tuning.
///
/// Missing keys take their defaults; out-of-range values are rejected.
pub fn load_config(path: &Path) -> AppResult<RiskModelConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.display().to_string() }.into());
    }

    let content = fs::read_to_string(path)?;
    let config: RiskModelConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

    tracing::debug!("Loaded risk model config from {}", path.display());
    Ok(config)
}

/// Load the tuning, falling back to defaults when the file is absent or bad.
///
/// A preview must always render, so a broken tuning file is logged and
/// ignored rather than surfaced.
pub fn load_config_or_default(path: &Path) -> RiskModelConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(AppError::Config(ConfigError::NotFound { .. })) => RiskModelConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring risk model config at {}: {}", path.display(), e);
            RiskModelConfig::default()
        },
    }
}

/// Validate and save the tuning with an atomic rename.
///
/// Creates the parent directory if needed. A failed write or rename leaves
/// no temp file behind.
pub fn save_config(path: &Path, config: &RiskModelConfig) -> AppResult<()> {
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

    let content = serde_json::to_string_pretty(config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::from_io_error(&e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let written = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            tracing::debug!("No temp file to remove at {}: {}", temp_path.display(), cleanup);
        }
        return Err(ConfigError::from_io_error(&e).into());
    }

    tracing::info!("Saved risk model config to {}", path.display());
    Ok(())
}

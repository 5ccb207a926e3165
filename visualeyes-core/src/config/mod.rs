//! Configuration: one sub-config per concern, all fields defaulted so an
//! empty TOML file is a valid config.

pub mod defaults;

mod aoi_config;
mod client_config;
mod render_config;
mod storage_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use aoi_config::AoiConfig;
pub use client_config::ClientConfig;
pub use render_config::RenderConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VISUALEYES_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualEyesConfig {
    pub client: ClientConfig,
    pub render: RenderConfig,
    pub aoi: AoiConfig,
    pub storage: StorageConfig,
}

impl VisualEyesConfig {
    /// Load from an optional TOML file, then apply env overrides and
    /// validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let content =
                    std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                        path: p.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: p.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.endpoint_url.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "client.endpoint_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.client.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "client.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(1..=100).contains(&self.render.quality) {
            return Err(ConfigError::ValidationFailed {
                field: "render.quality".to_string(),
                message: "must be between 1 and 100".to_string(),
            });
        }
        if self.render.scale <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "render.scale".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.aoi.min_width <= 0.0 || self.aoi.min_height <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "aoi.min_width/min_height".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `VISUALEYES_ENDPOINT_URL`, `VISUALEYES_TIMEOUT_SECS`, etc.
    fn apply_env_overrides(config: &mut VisualEyesConfig) {
        if let Ok(val) = std::env::var("VISUALEYES_ENDPOINT_URL") {
            config.client.endpoint_url = val;
        }
        if let Ok(val) = std::env::var("VISUALEYES_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.client.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("VISUALEYES_DATA_DIR") {
            config.storage.data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("VISUALEYES_WORK_DIR") {
            config.storage.work_dir = Some(val);
        }
    }

    /// The directory holding the settings file, creating nothing.
    /// Falls back to `~/.visualeyes` when unset.
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => home_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(defaults::DEFAULT_DATA_DIR_NAME),
        }
    }

    /// The directory for rendered artboards and fetched heatmaps.
    pub fn work_dir(&self) -> PathBuf {
        match &self.storage.work_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::temp_dir(),
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

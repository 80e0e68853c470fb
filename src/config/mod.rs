//! Configuration loading and management
//!
//! Every field has a default, so running without a config file behaves the
//! same as an empty one.

use crate::core::ConfigError;
use crate::generator::DEFAULT_BATCH_SIZE;
use crate::storage::DEFAULT_DATABASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "financedash.yaml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "FINANCEDASH_CONFIG";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// sqlx SQLite URL; the file is created if missing
    pub database_url: String,

    /// Invoices generated per run
    pub batch_size: usize,

    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,

    /// Address the dashboard API binds to
    pub bind_address: String,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            bind_address: "127.0.0.1:3000".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::Io {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                file: Some(display),
                message,
            },
            other => other,
        })
    }

    /// Resolve the configuration for a run.
    ///
    /// `FINANCEDASH_CONFIG` wins when set (and must exist); otherwise
    /// `financedash.yaml` is read if present; otherwise defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// Same as [`load`](Self::load) with the env lookup already done.
    pub fn load_from(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_yaml_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_yaml_file(default_path);
        }

        Ok(Self::default())
    }

    /// Reject values that cannot work at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database_url".to_string(),
                value: self.database_url.clone(),
                message: "must not be empty".to_string(),
            });
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bind_address".to_string(),
                value: self.bind_address.clone(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

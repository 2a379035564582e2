//! Gateway configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `KRAKE_*` environment variables (`__` separates nested
//! keys).

use std::collections::HashMap;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use krake_core::errors::{KrakeError, Result};
use krake_core::logging_facility::Profile;
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "KRAKE";

/// Largest accepted `history_capacity`
pub const MAX_HISTORY_CAPACITY: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Display name used in operator output
    pub app_name: String,
    /// Maximum number of journal entries kept in memory
    pub history_capacity: usize,
    /// Maximum command length in bytes
    pub max_command_len: usize,
    /// One of `development`, `production`, `test`
    pub log_profile: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_name: "Krake Orchestrator".to_string(),
            history_capacity: 100,
            max_command_len: 2048,
            log_profile: "development".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from an optional file plus the process environment
    ///
    /// # Errors
    ///
    /// Returns `KrakeError::Config` if the file is missing or malformed, or
    /// if a value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like `load`, but reads overrides from `env` instead of the process
    /// environment when it is given
    ///
    /// # Errors
    ///
    /// Returns `KrakeError::Config` on load or validation failure.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let loaded: GatewayConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| KrakeError::Config {
                message: e.to_string(),
            })?;

        loaded.validate()?;
        tracing::debug!(
            history_capacity = loaded.history_capacity,
            max_command_len = loaded.max_command_len,
            "gateway config loaded"
        );
        Ok(loaded)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `KrakeError::Config` naming the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.max_command_len == 0 {
            return Err(KrakeError::Config {
                message: "max_command_len must be greater than zero".to_string(),
            });
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(KrakeError::Config {
                message: format!(
                    "history_capacity must be at most {}, got {}",
                    MAX_HISTORY_CAPACITY, self.history_capacity
                ),
            });
        }
        self.profile().map(|_| ())
    }

    /// Logging profile named by `log_profile`
    ///
    /// # Errors
    ///
    /// Returns `KrakeError::Config` for an unknown profile name.
    pub fn profile(&self) -> Result<Profile> {
        Profile::parse(&self.log_profile).ok_or_else(|| KrakeError::Config {
            message: format!("Unknown log profile: {}", self.log_profile),
        })
    }
}

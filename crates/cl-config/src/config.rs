use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, FhirConfig, LoggingConfig};

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub fhir: FhirConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for CARELINK_CONFIG_DIR env var, else use ./.carelink/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CARELINK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CARELINK_CONFIG_DIR env var > ./.carelink/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("CARELINK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".carelink"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.fhir.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Per-request deadline for remote calls.
    pub fn fhir_timeout(&self) -> Duration {
        Duration::from_secs(self.fhir.timeout_secs)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  fhir: {} (timeout: {}s)",
            self.fhir.base_url, self.fhir.timeout_secs
        );
        info!("  logging: {}", *self.logging.level);
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("CARELINK_DATABASE_PATH") {
            self.database.path = path;
        }

        if let Ok(url) = std::env::var("CARELINK_FHIR_BASE_URL") {
            self.fhir.base_url = url;
        }

        if let Ok(secs) = std::env::var("CARELINK_FHIR_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.fhir.timeout_secs = secs;
            }
        }

        if let Ok(level) = std::env::var("CARELINK_LOG_LEVEL") {
            // FromStr never fails
            self.logging.level = crate::LogLevel::from_str(&level).unwrap();
        }
    }
}

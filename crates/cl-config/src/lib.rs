mod config;
mod database_config;
mod error;
mod fhir_config;
mod log_level;
mod logging_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use fhir_config::FhirConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_DATABASE_FILENAME: &str = "carelink.db";
const DEFAULT_FHIR_BASE_URL: &str = "http://localhost:8080/fhir";
const DEFAULT_FHIR_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";

#[cfg(test)]
mod tests;

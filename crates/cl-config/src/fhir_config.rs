use crate::{ConfigError, ConfigErrorResult, DEFAULT_FHIR_BASE_URL, DEFAULT_FHIR_TIMEOUT_SECS};

use serde::Deserialize;

/// Connection settings for the remote clinical-resource server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FhirConfig {
    /// Base URL of the FHIR REST endpoint (e.g. "http://localhost:8080/fhir").
    pub base_url: String,

    /// Deadline for every remote call, in seconds.
    pub timeout_secs: u64,
}

impl FhirConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::fhir("fhir.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::fhir(format!(
                "fhir.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::fhir("fhir.timeout_secs must be at least 1"));
        }

        Ok(())
    }
}

impl Default for FhirConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_FHIR_BASE_URL),
            timeout_secs: DEFAULT_FHIR_TIMEOUT_SECS,
        }
    }
}

use crate::{DEFAULT_LOG_LEVEL_STRING, LogLevel};

use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // FromStr never fails
            level: LogLevel::from_str(DEFAULT_LOG_LEVEL_STRING).unwrap(),
        }
    }
}

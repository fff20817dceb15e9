pub mod defaults;
mod search_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use search_config::SearchConfig;

use crate::errors::{CausewayResult, ConfigError};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub search: SearchConfig,
}

impl CausewayConfig {
    /// Parse from a TOML string. Missing keys take their defaults.
    pub fn from_toml(input: &str) -> CausewayResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CausewayResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&text)
    }
}

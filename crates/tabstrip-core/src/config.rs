//! Tab group configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabstrip_state::Token;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit id of the tab that starts active. When unset, the first
    /// registered tab becomes active.
    pub default_active_tab: Option<String>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(id) = &self.default_active_tab {
            if id.is_empty() {
                return Err(CoreError::Config(
                    "default_active_tab cannot be empty".to_string(),
                ));
            }
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Default token for a new controller
    pub fn default_token(&self) -> Result<Option<Token>> {
        self.default_active_tab
            .as_deref()
            .map(Token::explicit)
            .transpose()
            .map_err(CoreError::from)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_active_tab: None,
            log_filter: "info".to_string(),
        }
    }
}

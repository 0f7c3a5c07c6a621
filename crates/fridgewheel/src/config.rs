//! Application configuration: wheel tuning plus the chat endpoint.

use crate::chat::ChatConfig;
use fridgewheel_core::{ConfigError, WheelConfig};
use serde::{Deserialize, Serialize};

/// Everything the page can configure, read from one TOML document.
///
/// ```toml
/// [wheel.spin]
/// min_turns = 3.0
///
/// [chat]
/// model = "gpt-4o-mini"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FridgeConfig {
    /// Wheel tuning and style
    pub wheel: WheelConfig,
    /// Completion endpoint and model
    pub chat: ChatConfig,
}

impl FridgeConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wheel.validate()?;
        self.chat.validate()
    }
}

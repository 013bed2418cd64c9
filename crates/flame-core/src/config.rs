//! Dojo configuration

use serde::{Deserialize, Serialize};
use std::env;
use crate::{Error, Result};

/// Configuration for the dojo's optional capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DojoConfig {
    /// Explicit speech command line; auto-detected when `None`
    pub voice_command: Option<String>,
    /// Explicit clipboard command line; auto-detected when `None`
    pub clipboard_command: Option<String>,
    pub voice_enabled: bool,
    pub clipboard_enabled: bool,
}

impl DojoConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let voice_command = non_empty_var("FLAME_VOICE_COMMAND");
        let clipboard_command = non_empty_var("FLAME_CLIPBOARD_COMMAND");
        let voice_enabled = !flag_var("FLAME_DISABLE_VOICE")?;
        let clipboard_enabled = !flag_var("FLAME_DISABLE_CLIPBOARD")?;

        Ok(Self {
            voice_command,
            clipboard_command,
            voice_enabled,
            clipboard_enabled,
        })
    }

    /// Create configuration with both capabilities enabled and auto-detected
    pub fn new() -> Self {
        Self {
            voice_command: None,
            clipboard_command: None,
            voice_enabled: true,
            clipboard_enabled: true,
        }
    }

    pub fn without_voice(mut self) -> Self {
        self.voice_enabled = false;
        self
    }

    pub fn without_clipboard(mut self) -> Self {
        self.clipboard_enabled = false;
        self
    }
}

impl Default for DojoConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn flag_var(name: &str) -> Result<bool> {
    match non_empty_var(name) {
        None => Ok(false),
        Some(value) => parse_flag(&value).ok_or_else(|| {
            Error::Configuration(format!("{} must be a boolean, got '{}'", name, value))
        }),
    }
}

/// Parse a boolean-like environment value
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("sometimes"), None);
    }

    #[test]
    fn test_builder_toggles() {
        let config = DojoConfig::new().without_voice();
        assert!(!config.voice_enabled);
        assert!(config.clipboard_enabled);

        let config = DojoConfig::new().without_clipboard();
        assert!(config.voice_enabled);
        assert!(!config.clipboard_enabled);
    }

    #[test]
    fn test_config_snapshot() {
        let config = DojoConfig {
            voice_command: Some("espeak -s 150".to_string()),
            clipboard_command: None,
            voice_enabled: true,
            clipboard_enabled: false,
        };

        insta::assert_yaml_snapshot!(config, @r###"
        voice_command: espeak -s 150
        clipboard_command: ~
        voice_enabled: true
        clipboard_enabled: false
        "###);
    }
}

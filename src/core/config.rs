use std::env;

use crate::core::app;

/// Default character repeated under each line by the underline transformer.
pub const DEFAULT_UNDERLINE_CHAR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub icon_path: String,
    pub underline_char: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_path: app::DEFAULT_ICON.to_string(),
            underline_char: DEFAULT_UNDERLINE_CHAR,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUnderlineChar(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidUnderlineChar(value) => write!(
                f,
                "TEXTMOD_UNDERLINE_CHAR must be a single character, got {:?}",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from environment. Unset variables fall back to defaults.
pub fn load() -> Result<Config, ConfigError> {
    from_values(
        env::var("TEXTMOD_ICON").ok(),
        env::var("TEXTMOD_UNDERLINE_CHAR").ok(),
    )
}

fn from_values(icon: Option<String>, underline: Option<String>) -> Result<Config, ConfigError> {
    let icon_path = icon
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| app::DEFAULT_ICON.to_string());

    let underline_char = match underline {
        None => DEFAULT_UNDERLINE_CHAR,
        Some(value) => parse_single_char(&value)
            .ok_or_else(|| ConfigError::InvalidUnderlineChar(value.clone()))?,
    };

    Ok(Config {
        icon_path,
        underline_char,
    })
}

fn parse_single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

//! Configuration management for indentcheck.
//!
//! This module provides the [`Config`] struct which controls what the analyzer
//! looks for. Configuration can be loaded from:
//! - TOML files (via `-c/--config`)
//! - CLI arguments (which override file settings)
//!
//! The defaults reproduce the recognition tokens and marker glyph used by the
//! terminal-renderer regression captures this tool was written against.

use std::path::Path;

use serde::{Deserialize, Serialize};

// Serde default functions
fn default_tokens() -> Vec<String> {
    ["aaaa", "bbbb", "cccc", "dddd"]
        .iter()
        .map(ToString::to_string)
        .collect()
}
fn default_marker() -> String {
    "✦".to_string()
}

/// Main configuration struct for indentcheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recognition tokens: a line containing any of these is treated as test
    /// content and measured (default: aaaa, bbbb, cccc, dddd)
    #[serde(default = "default_tokens")]
    pub tokens: Vec<String>,

    /// Marker glyph denoting the start of a new logical block; lines whose
    /// content contains it are excluded from the indentation comparison
    /// (default: ✦)
    #[serde(default = "default_marker")]
    pub marker: String,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub tokens: Option<Vec<String>>,
    pub marker: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tokens: default_tokens(),
            marker: default_marker(),
        }
    }
}

impl Config {
    /// Maximum reasonable number of recognition tokens
    const MAX_TOKENS: usize = 64;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.tokens.is_empty() {
            return Some("token set must contain at least one token".to_string());
        }
        if self.tokens.len() > Self::MAX_TOKENS {
            return Some(format!(
                "token set size {} exceeds maximum of {}",
                self.tokens.len(),
                Self::MAX_TOKENS
            ));
        }
        if self.tokens.iter().any(String::is_empty) {
            return Some("tokens must be non-empty strings".to_string());
        }
        if self.marker.is_empty() {
            return Some("marker must be a non-empty string".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = &partial.tokens {
            self.tokens = v.clone();
        }
        if let Some(v) = &partial.marker {
            self.marker = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let config = Config::default();
        assert_eq!(config.tokens, vec!["aaaa", "bbbb", "cccc", "dddd"]);
        assert_eq!(config.marker, "✦");
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_none());
    }

    #[test]
    fn test_validate_empty_token_set() {
        let config = Config {
            tokens: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_empty_token_string() {
        let config = Config {
            tokens: vec!["aaaa".to_string(), String::new()],
            ..Config::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_empty_marker() {
        let config = Config {
            marker: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_partial_toml_overrides_tokens_only() {
        let partial: PartialConfig = toml::from_str(r#"tokens = ["xxxx", "yyyy"]"#).unwrap();
        let mut config = Config::default();
        config.apply_partial(&partial);
        assert_eq!(config.tokens, vec!["xxxx", "yyyy"]);
        assert_eq!(config.marker, "✦");
    }

    #[test]
    fn test_partial_toml_overrides_marker_only() {
        let partial: PartialConfig = toml::from_str(r#"marker = ">>""#).unwrap();
        let mut config = Config::default();
        config.apply_partial(&partial);
        assert_eq!(config.tokens, vec!["aaaa", "bbbb", "cccc", "dddd"]);
        assert_eq!(config.marker, ">>");
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let partial: PartialConfig = toml::from_str("").unwrap();
        let mut config = Config::default();
        config.apply_partial(&partial);
        assert_eq!(config.tokens, Config::default().tokens);
        assert_eq!(config.marker, Config::default().marker);
    }
}

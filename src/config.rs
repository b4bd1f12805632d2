//! CLI defaults configuration
//!
//! Parses an optional `pagebar.toml` into default visibility parameters for
//! the command-line interface. The library API never reads this; it only
//! fills in `--boundaries` and `--around` when the flags are omitted.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Default visibility parameters applied when CLI flags are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BarConfig {
    /// Pages always shown at each end of the sequence (default: 1)
    #[serde(default = "default_boundaries")]
    pub boundaries: i64,
    /// Window radius around the current page (default: 2)
    #[serde(default = "default_around")]
    pub around: i64,
}

const fn default_boundaries() -> i64 {
    1
}

const fn default_around() -> i64 {
    2
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            boundaries: default_boundaries(),
            around: default_around(),
        }
    }
}

impl BarConfig {
    /// Parse a pagebar.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse pagebar.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse pagebar.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to built-in defaults when it does
    /// not exist. An unreadable or malformed file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.boundaries < 0 {
            bail!("'boundaries' must be non-negative, got {}", self.boundaries);
        }
        if self.around < 0 {
            bail!("'around' must be non-negative, got {}", self.around);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = BarConfig::parse("boundaries = 3\naround = 1\n").unwrap();
        assert_eq!(config.boundaries, 3);
        assert_eq!(config.around, 1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = BarConfig::parse("boundaries = 4\n").unwrap();
        assert_eq!(config.boundaries, 4);
        assert_eq!(config.around, 2);

        let config = BarConfig::parse("").unwrap();
        assert_eq!(config, BarConfig::default());
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(BarConfig::parse("boundaries = -1\n").is_err());
        assert!(BarConfig::parse("around = -2\n").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(BarConfig::parse("boundaries = [oops\n").is_err());
        assert!(BarConfig::parse("boundaries = \"three\"\n").is_err());
    }
}

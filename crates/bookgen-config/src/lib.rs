//! Bookgen Config
//!
//! This crate handles configuration loading and management for bookgen,
//! supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/bookgen/config.toml`
//! - macOS: `~/Library/Application Support/bookgen/config.toml`
//! - Windows: `%APPDATA%\bookgen\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use bookgen_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod document;
mod theme;

pub use document::DocumentConfig;
pub use theme::{Palette, StyleConfig};

use bookgen_core::{BookgenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[document]
HeadingPolicy = "Relaxed"
TocCapacity   = 100
TocDepth      = 0

[style]
IndentWidth = 2
Theme       = "Light"
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for bookgen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document behavior configuration
    #[serde(default)]
    pub document: DocumentConfig,

    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgen_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[document]"));
    /// assert!(toml.contains("[style]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bookgen")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bookgen")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| BookgenError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| BookgenError::Config(format!("Parse error: {}", e)));
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            BookgenError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location.
    /// 2. If `override_config` is provided:
    ///    - if it names an existing file, load and merge it;
    ///    - otherwise, treat it as inline TOML and merge that.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bookgen_config::Config;
    ///
    /// // Load with file override
    /// let config = Config::load_with_override(Some("./custom.toml")).unwrap();
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[document]\nTocCapacity = 500")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| BookgenError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgen_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [document]
    ///     TocCapacity = 500
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.document.toc_capacity, 500);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.document.merge(&other.document);
        self.style.merge(&other.style);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| BookgenError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookgen_core::{HeadingPolicy, Theme};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document.heading_policy, HeadingPolicy::Relaxed);
        assert_eq!(config.document.toc_capacity, 100);
        assert_eq!(config.document.toc_depth, 0);
        assert_eq!(config.style.indent_width, 2);
        assert_eq!(config.style.theme, Theme::Light);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config.document.heading_policy, HeadingPolicy::Relaxed);
        assert_eq!(config.style.theme, Theme::Light);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        assert_eq!(base.document.toc_capacity, 100);

        let override_toml = r#"
            [document]
            HeadingPolicy = "Strict"
            TocCapacity = 500
            [style]
            IndentWidth = 4
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.document.heading_policy, HeadingPolicy::Strict);
        assert_eq!(base.document.toc_capacity, 500);
        assert_eq!(base.style.indent_width, 4);
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("bookgen"));
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.document.toc_capacity, parsed.document.toc_capacity);
        assert_eq!(config.style.indent_width, parsed.style.indent_width);
        assert_eq!(config.style.theme, parsed.style.theme);
    }
}

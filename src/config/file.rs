//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML
//! file located at `~/.config/packagify/config.toml` (or the
//! platform-specific equivalent). Configuration file values serve as
//! defaults that can be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! output_dir = "~/Packages"
//! tools_version = 6.0
//!
//! [generation]
//! name = "My Swift Package"
//! platforms = ["ios=13", "macos=11"]
//! interactive = true
//!
//! [output]
//! verbose = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present
/// in the config file and apply layered configuration (CLI > config
/// file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Default destination directory for generated packages
    pub output_dir: Option<PathBuf>,

    /// Default manifest tools version (overrides the toolchain probe)
    pub tools_version: Option<f64>,

    /// Generation options
    #[serde(default)]
    pub generation: FileGenerationConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Generation options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileGenerationConfig {
    /// Default package name
    pub name: Option<String>,

    /// Default platform constraints as `platform[=version]` specs
    /// (e.g., `"ios=13"`, `"macos"`)
    pub platforms: Option<Vec<String>>,

    /// Whether to use interactive file and platform selection
    pub interactive: Option<bool>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileOutputConfig {
    /// Whether to print skipped-file warnings and extra detail
    pub verbose: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at
    /// `<config_dir>/packagify/config.toml`, where `<config_dir>` is the
    /// platform-specific configuration directory (e.g., `~/.config` on
    /// Linux/macOS, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("packagify").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration. If the file exists but is malformed, returns an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.output_dir.is_none());
        assert!(config.tools_version.is_none());
        assert!(config.generation.name.is_none());
        assert!(config.generation.platforms.is_none());
        assert!(config.generation.interactive.is_none());
        assert!(config.output.verbose.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            output_dir = "~/Packages"
            tools_version = 5.9

            [generation]
            name = "My Swift Package"
            platforms = ["ios=13", "tvos=13"]
            interactive = true

            [output]
            verbose = true
        "#;

        let config: FileConfig = toml::from_str(toml_str).expect("valid config");

        assert_eq!(config.output_dir, Some(PathBuf::from("~/Packages")));
        assert_eq!(config.tools_version, Some(5.9));
        assert_eq!(
            config.generation.name,
            Some("My Swift Package".to_string())
        );
        assert_eq!(
            config.generation.platforms,
            Some(vec!["ios=13".to_string(), "tvos=13".to_string()])
        );
        assert_eq!(config.generation.interactive, Some(true));
        assert_eq!(config.output.verbose, Some(true));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [generation]
            interactive = true
        "#;

        let config: FileConfig = toml::from_str(toml_str).expect("valid config");

        assert!(config.output_dir.is_none());
        assert_eq!(config.generation.interactive, Some(true));
        assert!(config.output.verbose.is_none());
    }

    #[test]
    fn test_expand_tilde() {
        let absolute = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_tilde(&PathBuf::from("~/Packages")),
                home.join("Packages")
            );
        }
    }

    #[test]
    fn test_config_path_ends_with_expected_components() {
        if let Some(path) = FileConfig::config_path() {
            assert!(path.ends_with("packagify/config.toml"));
        }
    }
}

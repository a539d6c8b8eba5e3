//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their
//! validation using the [clap](https://docs.rs/clap/) library. It provides
//! structured access to user input and handles argument conflicts and
//! defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use packagify::config::file::{FileConfig, expand_tilde};
use packagify::package::{Platform, PlatformConstraint};

/// Command-line arguments controlling what goes into the package.
#[derive(Parser)]
struct GenerationArgs {
    /// Name of the generated package
    ///
    /// Spaces are replaced with underscores wherever the name appears in
    /// the manifest and the directory layout, so it's not recommended to
    /// use them. Without this flag the name is prompted for in
    /// interactive mode, or a default name is used.
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Target platform with an optional minimum version
    ///
    /// Accepts `platform` or `platform=version`, e.g. `--platform ios=13.5`
    /// or `--platform macos`. Without a version, the platform's default
    /// minimum version is used. Can be specified multiple times; the
    /// manifest lists platforms in the order given.
    #[arg(short = 'p', long = "platform", value_name = "PLATFORM[=VERSION]", action = clap::ArgAction::Append)]
    platforms: Vec<String>,

    /// Manifest tools version (e.g. 6.0)
    ///
    /// Without this flag, the config file is consulted, then the
    /// installed Swift toolchain is probed; if neither yields a version,
    /// 6.0 is used.
    #[arg(short = 't', long)]
    tools_version: Option<f64>,

    /// Start with a single empty source file instead of input paths
    ///
    /// Seeds the package with a generated `Source.swift` containing only
    /// `import Foundation`. Useful for getting the package project
    /// structure before writing any code.
    #[arg(long)]
    empty: bool,

    /// Use interactive file and platform selection
    ///
    /// When enabled, presents the found Swift files in a multi-select
    /// prompt (all pre-selected) and prompts for the package name and
    /// platform minimum versions. Without it, all found files are
    /// included and platforms come from `--platform` flags.
    #[arg(short = 'i', long)]
    interactive: bool,
}

/// Command-line arguments controlling where and how results are written.
#[derive(Parser)]
struct OutputArgs {
    /// Destination directory for the generated package
    ///
    /// The package is written to `<OUTPUT>/<Name>/`. Defaults to the
    /// current directory. An existing package directory at that path is
    /// removed and replaced.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Render and print the manifest without writing anything to disk
    #[arg(long)]
    dry_run: bool,

    /// Export a hand-edited manifest instead of the rendered one
    ///
    /// The file's text is written as `Package.swift` verbatim. The source
    /// files written next to it still follow the file selection, not the
    /// manifest text.
    #[arg(long, value_name = "FILE")]
    manifest_file: Option<PathBuf>,

    /// Show files that were skipped because they could not be read
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// This struct defines the complete command-line interface for the
/// packagify tool, combining all argument groups and providing the main
/// entry point for command parsing.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file
/// values act as defaults when the corresponding CLI argument is not
/// provided.
#[derive(Parser)]
#[command(name = "packagify")]
#[command(
    about = "Turn loose Swift source files or a folder into a ready-to-build Swift Package Manager project"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Swift source files and/or a folder containing them
    ///
    /// Each path is classified independently. If any path is a folder,
    /// that folder's Swift files become the entire input and all other
    /// paths are ignored; otherwise all Swift files among the paths are
    /// used, in the order given.
    #[arg(num_args = 0..)]
    paths: Vec<PathBuf>,

    /// Output a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, prompts,
    /// summaries) is suppressed and a single JSON document is printed to
    /// stdout. Incompatible with `--interactive`.
    #[arg(long)]
    json: bool,

    /// Generation options
    #[command(flatten)]
    generation: GenerationArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// The input paths as given on the command line.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Whether `--empty` was passed.
    #[must_use]
    pub const fn empty(&self) -> bool {
        self.generation.empty
    }

    /// Whether `--dry-run` was passed.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.output.dry_run
    }

    /// The hand-edited manifest file to export, if any.
    #[must_use]
    pub fn manifest_file(&self) -> Option<&PathBuf> {
        self.output.manifest_file.as_ref()
    }

    /// Resolve the package name from CLI args and config file, if either
    /// provides one.
    #[must_use]
    pub fn name(&self, config: &FileConfig) -> Option<String> {
        self.generation
            .name
            .clone()
            .or_else(|| config.generation.name.clone())
    }

    /// Resolve the platform specs from CLI args and config file.
    ///
    /// CLI `--platform` flags take priority as a whole: when any are
    /// given, config platforms are ignored rather than merged.
    #[must_use]
    pub fn platform_specs(&self, config: &FileConfig) -> Vec<String> {
        if self.generation.platforms.is_empty() {
            config.generation.platforms.clone().unwrap_or_default()
        } else {
            self.generation.platforms.clone()
        }
    }

    /// Resolve the tools version from CLI args and config file, if
    /// either provides one. The toolchain probe and the built-in default
    /// are applied by the caller when this returns `None`.
    #[must_use]
    pub fn tools_version(&self, config: &FileConfig) -> Option<f64> {
        self.generation.tools_version.or(config.tools_version)
    }

    /// Resolve the destination directory from CLI args, config file, or
    /// the current directory. Tilde expansion is applied to paths
    /// originating from the config file.
    #[must_use]
    pub fn output_dir(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref output) = self.output.output {
            return output.clone();
        }

        if let Some(ref dir) = config.output_dir {
            return expand_tilde(dir);
        }

        PathBuf::from(".")
    }

    /// Whether interactive selection is enabled (CLI flag or config).
    #[must_use]
    pub fn interactive(&self, config: &FileConfig) -> bool {
        self.generation.interactive || config.generation.interactive.unwrap_or(false)
    }

    /// Whether verbose output is enabled (CLI flag or config).
    #[must_use]
    pub fn verbose(&self, config: &FileConfig) -> bool {
        self.output.verbose || config.output.verbose.unwrap_or(false)
    }
}

/// Parse a `platform[=version]` spec into a constraint.
///
/// Without a version, the platform's default minimum version is used.
///
/// # Errors
///
/// Fails on an unknown platform name or an unparsable version number.
pub fn parse_platform_spec(spec: &str) -> Result<PlatformConstraint> {
    let (name, version) = match spec.split_once('=') {
        Some((name, version)) => (name, Some(version)),
        None => (spec, None),
    };

    let platform: Platform = match name.trim().parse() {
        Ok(platform) => platform,
        Err(message) => bail!("{message}"),
    };

    let min_version = match version {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid version '{raw}' in platform spec '{spec}'"))?,
        None => platform.default_version(),
    };

    Ok(PlatformConstraint::new(platform, min_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use packagify::config::file::{FileGenerationConfig, FileOutputConfig};

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["packagify"]);
        let config = FileConfig::default();

        assert!(args.paths().is_empty());
        assert!(!args.json());
        assert!(!args.empty());
        assert!(!args.dry_run());
        assert!(args.manifest_file().is_none());
        assert!(args.name(&config).is_none());
        assert!(args.platform_specs(&config).is_empty());
        assert!(args.tools_version(&config).is_none());
        assert_eq!(args.output_dir(&config), PathBuf::from("."));
        assert!(!args.interactive(&config));
        assert!(!args.verbose(&config));
    }

    #[test]
    fn test_paths_are_positional() {
        let args = Cli::parse_from(["packagify", "a.swift", "b.swift"]);
        assert_eq!(
            args.paths(),
            &[PathBuf::from("a.swift"), PathBuf::from("b.swift")]
        );
    }

    #[test]
    fn test_name_flag() {
        let config = FileConfig::default();
        let args = Cli::parse_from(["packagify", "--name", "My Tool"]);
        assert_eq!(args.name(&config), Some("My Tool".to_string()));

        let args_short = Cli::parse_from(["packagify", "-n", "My Tool"]);
        assert_eq!(args_short.name(&config), Some("My Tool".to_string()));
    }

    #[test]
    fn test_name_from_config_when_cli_absent() {
        let args = Cli::parse_from(["packagify"]);
        let config = FileConfig {
            generation: FileGenerationConfig {
                name: Some("Configured".to_string()),
                ..FileGenerationConfig::default()
            },
            ..FileConfig::default()
        };

        assert_eq!(args.name(&config), Some("Configured".to_string()));
    }

    #[test]
    fn test_cli_name_overrides_config() {
        let args = Cli::parse_from(["packagify", "--name", "FromCli"]);
        let config = FileConfig {
            generation: FileGenerationConfig {
                name: Some("FromConfig".to_string()),
                ..FileGenerationConfig::default()
            },
            ..FileConfig::default()
        };

        assert_eq!(args.name(&config), Some("FromCli".to_string()));
    }

    #[test]
    fn test_multiple_platform_flags_keep_order() {
        let config = FileConfig::default();
        let args = Cli::parse_from([
            "packagify",
            "--platform",
            "watchos=6",
            "--platform",
            "ios=13.5",
            "-p",
            "macos",
        ]);

        assert_eq!(
            args.platform_specs(&config),
            vec![
                "watchos=6".to_string(),
                "ios=13.5".to_string(),
                "macos".to_string()
            ]
        );
    }

    #[test]
    fn test_cli_platforms_replace_config_platforms() {
        let args = Cli::parse_from(["packagify", "--platform", "ios"]);
        let config = FileConfig {
            generation: FileGenerationConfig {
                platforms: Some(vec!["macos=11".to_string()]),
                ..FileGenerationConfig::default()
            },
            ..FileConfig::default()
        };

        assert_eq!(args.platform_specs(&config), vec!["ios".to_string()]);
    }

    #[test]
    fn test_tools_version_layering() {
        let config = FileConfig {
            tools_version: Some(5.9),
            ..FileConfig::default()
        };

        let args = Cli::parse_from(["packagify"]);
        assert_eq!(args.tools_version(&config), Some(5.9));

        let args_flag = Cli::parse_from(["packagify", "--tools-version", "6.0"]);
        assert_eq!(args_flag.tools_version(&config), Some(6.0));
    }

    #[test]
    fn test_output_dir_layering() {
        let args = Cli::parse_from(["packagify", "--output", "/cli/dir"]);
        let config = FileConfig {
            output_dir: Some(PathBuf::from("/config/dir")),
            ..FileConfig::default()
        };

        assert_eq!(args.output_dir(&config), PathBuf::from("/cli/dir"));

        let args_no_flag = Cli::parse_from(["packagify"]);
        assert_eq!(args_no_flag.output_dir(&config), PathBuf::from("/config/dir"));
    }

    #[test]
    fn test_output_dir_tilde_expansion_from_config() {
        let args = Cli::parse_from(["packagify"]);
        let config = FileConfig {
            output_dir: Some(PathBuf::from("~/Packages")),
            ..FileConfig::default()
        };

        let dir = args.output_dir(&config);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(dir, home.join("Packages"));
        }
    }

    #[test]
    fn test_interactive_cli_or_config() {
        let config_on = FileConfig {
            generation: FileGenerationConfig {
                interactive: Some(true),
                ..FileGenerationConfig::default()
            },
            ..FileConfig::default()
        };

        let args = Cli::parse_from(["packagify"]);
        assert!(args.interactive(&config_on));

        let args_flag = Cli::parse_from(["packagify", "-i"]);
        assert!(args_flag.interactive(&FileConfig::default()));
    }

    #[test]
    fn test_verbose_cli_or_config() {
        let config_on = FileConfig {
            output: FileOutputConfig {
                verbose: Some(true),
            },
            ..FileConfig::default()
        };

        let args = Cli::parse_from(["packagify"]);
        assert!(args.verbose(&config_on));

        let args_flag = Cli::parse_from(["packagify", "-v"]);
        assert!(args_flag.verbose(&FileConfig::default()));
    }

    #[test]
    fn test_empty_and_dry_run_flags() {
        let args = Cli::parse_from(["packagify", "--empty", "--dry-run"]);
        assert!(args.empty());
        assert!(args.dry_run());
    }

    #[test]
    fn test_manifest_file_flag() {
        let args = Cli::parse_from(["packagify", "--manifest-file", "/tmp/Package.swift"]);
        assert_eq!(
            args.manifest_file(),
            Some(&PathBuf::from("/tmp/Package.swift"))
        );
    }

    // ── Platform spec parsing ──────────────────────────────────────────

    #[test]
    fn test_parse_platform_spec_with_version() {
        let constraint = parse_platform_spec("ios=13.5").expect("valid spec");
        assert_eq!(constraint.platform, Platform::Ios);
        assert_eq!(constraint.min_version, 13.5);
    }

    #[test]
    fn test_parse_platform_spec_defaults_version() {
        let constraint = parse_platform_spec("driverkit").expect("valid spec");
        assert_eq!(constraint.platform, Platform::DriverKit);
        assert_eq!(constraint.min_version, 19.0);
    }

    #[test]
    fn test_parse_platform_spec_case_insensitive() {
        let constraint = parse_platform_spec("tvOS=13").expect("valid spec");
        assert_eq!(constraint.platform, Platform::TvOs);
        assert_eq!(constraint.min_version, 13.0);
    }

    #[test]
    fn test_parse_platform_spec_trims_whitespace() {
        let constraint = parse_platform_spec("macos = 11").expect("valid spec");
        assert_eq!(constraint.platform, Platform::MacOs);
        assert_eq!(constraint.min_version, 11.0);
    }

    #[test]
    fn test_parse_platform_spec_rejects_unknown_platform() {
        assert!(parse_platform_spec("android=13").is_err());
    }

    #[test]
    fn test_parse_platform_spec_rejects_bad_version() {
        assert!(parse_platform_spec("ios=latest").is_err());
    }
}

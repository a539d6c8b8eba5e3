//! Entry point for the packagify application.

mod cli;

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use inquire::{MultiSelect, Text};
use packagify::config::FileConfig;
use packagify::output::JsonOutput;
use packagify::package::manifest::render;
use packagify::package::model::DEFAULT_PACKAGE_NAME;
use packagify::package::{PackageModel, Platform, PlatformConstraint, SourceFile};
use packagify::toolchain::{SwiftToolchain, ToolsVersionProbe};
use packagify::{collect_from_paths, materialize};

use cli::{Cli, Commands, ConfigCommand, parse_platform_spec};

/// Entry point for the packagify application.
///
/// This function handles all errors gracefully by calling [`inner_main`]
/// and printing any errors to stderr before exiting with a non-zero
/// status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        std::process::exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments,
/// classify and collect the input files, resolve the selection and
/// package metadata, render the manifest, and either preview it or
/// write the package tree.
///
/// # Errors
///
/// Returns errors from argument validation, input classification,
/// interactive prompts, manifest-file reads, file-system writes, or
/// JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let config = load_config(json_mode);

    if json_mode && args.interactive(&config) {
        bail!("--json and --interactive cannot be used together");
    }

    let Some(files) = gather_input_files(&args, &config)? else {
        return Ok(());
    };

    let selected_names = resolve_selection(&args, &config, &files)?;
    if selected_names.is_empty() {
        if !json_mode {
            println!("{}", "✨ No files selected; nothing to generate.".green());
        }
        return Ok(());
    }

    let model = build_model(&args, &config, &files, &selected_names)?;
    let manifest = resolve_manifest(&args, &model)?;

    if args.dry_run() {
        return print_dry_run(&model, &manifest, json_mode);
    }

    let output_dir = args.output_dir(&config);
    let package_root = materialize(&manifest, &model, &output_dir)
        .with_context(|| format!("Failed to write package to {}", output_dir.display()))?;

    if json_mode {
        let output = JsonOutput::from_generated(&model, &package_root, &manifest);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "\n{} {}",
            "📦 Package created at".green().bold(),
            package_root.display().to_string().bright_white()
        );
        println!(
            "   {} source file(s), {} platform(s), tools version {}",
            model.source_files().len(),
            model.platforms().len(),
            model.tools_version()
        );
    }

    Ok(())
}

// ── Input collection ────────────────────────────────────────────────────

/// Classify and collect the input files from paths or `--empty`.
///
/// Returns `Ok(None)` after printing a message when there is nothing to
/// package (caller should exit cleanly).
fn gather_input_files(args: &Cli, config: &FileConfig) -> Result<Option<Vec<SourceFile>>> {
    if args.empty() {
        return Ok(Some(vec![SourceFile::new(
            "Source.swift",
            b"import Foundation\n".to_vec(),
        )]));
    }

    if args.paths().is_empty() {
        bail!("Pass Swift files or a folder containing Swift files (or use --empty)");
    }

    let collected = collect_from_paths(args.paths())
        .with_context(|| "Failed to collect Swift files from the given paths")?;

    if args.verbose(config) {
        for skipped in &collected.skipped {
            eprintln!("{} {skipped}", "Warning: skipped input:".yellow());
        }
    }

    if collected.files.is_empty() {
        if args.json() {
            let model = PackageModel::new(DEFAULT_PACKAGE_NAME);
            let output = JsonOutput::from_dry_run(&model, "");
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "{}",
                "✨ No Swift files were found; pick different files or a different folder."
                    .green()
            );
        }
        return Ok(None);
    }

    Ok(Some(collected.files))
}

// ── Selection and metadata ──────────────────────────────────────────────

/// Resolve which of the found files go into the package.
///
/// In interactive mode, presents a multi-select prompt with every file
/// pre-selected; otherwise all files are included.
fn resolve_selection(args: &Cli, config: &FileConfig, files: &[SourceFile]) -> Result<Vec<String>> {
    if !args.interactive(config) {
        return Ok(files.iter().map(|file| file.name.clone()).collect());
    }

    let items: Vec<String> = files
        .iter()
        .map(|file| {
            format!(
                "{} ({})",
                file.name,
                format_size(file.contents.len() as u64, DECIMAL)
            )
        })
        .collect();

    let defaults: Vec<usize> = (0..files.len()).collect();

    let selections = MultiSelect::new("Select files to include in the package:", items.clone())
        .with_default(&defaults)
        .prompt()?;

    Ok(files
        .iter()
        .zip(items.iter())
        .filter(|(_, item)| selections.contains(item))
        .map(|(file, _)| file.name.clone())
        .collect())
}

/// Build the package model from the selection and the resolved metadata.
fn build_model(
    args: &Cli,
    config: &FileConfig,
    files: &[SourceFile],
    selected_names: &[String],
) -> Result<PackageModel> {
    let name = resolve_name(args, config)?;
    let mut model = PackageModel::new(name).with_selection(files, selected_names);

    for constraint in resolve_platforms(args, config)? {
        model = model.with_platform(constraint.platform, true, constraint.min_version);
    }

    let tools_version = args
        .tools_version(config)
        .or_else(|| SwiftToolchain.default_tools_version());

    Ok(model.with_tools_version(tools_version))
}

/// Resolve the package name from flags, config, or an interactive prompt.
fn resolve_name(args: &Cli, config: &FileConfig) -> Result<String> {
    if let Some(name) = args.name(config) {
        return Ok(name);
    }

    if args.interactive(config) {
        let name = Text::new("Package name:")
            .with_default(DEFAULT_PACKAGE_NAME)
            .with_help_message("Spaces will be replaced with _ in the package")
            .prompt()?;
        return Ok(name);
    }

    Ok(DEFAULT_PACKAGE_NAME.to_string())
}

/// Resolve the platform constraints from flags/config or prompts.
fn resolve_platforms(args: &Cli, config: &FileConfig) -> Result<Vec<PlatformConstraint>> {
    let specs = args.platform_specs(config);

    if !specs.is_empty() {
        return specs
            .iter()
            .map(|spec| parse_platform_spec(spec))
            .collect();
    }

    if !args.interactive(config) {
        return Ok(Vec::new());
    }

    let names: Vec<String> = Platform::ALL
        .iter()
        .map(ToString::to_string)
        .collect();

    let selections = MultiSelect::new("Supported platforms:", names).prompt()?;

    let mut constraints = Vec::new();
    for platform in Platform::ALL {
        if !selections.contains(&platform.to_string()) {
            continue;
        }

        let default = platform.default_version();
        let answer = Text::new(&format!("{platform} minimum version:"))
            .with_default(&default.to_string())
            .prompt()?;

        let min_version = answer.trim().parse::<f64>().unwrap_or(default);
        constraints.push(PlatformConstraint::new(platform, min_version));
    }

    Ok(constraints)
}

/// Resolve the manifest text: a hand-edited file wins over a re-render.
fn resolve_manifest(args: &Cli, model: &PackageModel) -> Result<String> {
    match args.manifest_file() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file {}", path.display())),
        None => Ok(render(model)),
    }
}

/// Print the rendered manifest without writing anything.
fn print_dry_run(model: &PackageModel, manifest: &str, json_mode: bool) -> Result<()> {
    if json_mode {
        let output = JsonOutput::from_dry_run(model, manifest);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{manifest}");
    }
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# packagify configuration
# All values shown are their defaults. Uncomment and change as needed.

# Destination directory for generated packages (defaults to the current directory)
# output_dir = "."

# Manifest tools version; when unset, the installed Swift toolchain is probed
# and 6.0 is used if probing fails
# tools_version = 6.0

[generation]
# Default package name
# name = "My Swift Package"

# Default platform constraints as platform[=version] specs
# platforms = ["ios=13", "macos=11"]

# Use interactive file and platform selection
# interactive = false

[output]
# Show files that were skipped because they could not be read
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_version(val: Option<f64>) -> String {
        val.map_or_else(
            || "(probe toolchain, else 6.0)  (default)".to_string(),
            |v| v.to_string(),
        )
    }
    fn show_specs(val: Option<&[String]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|s| format!("\"{s}\"")).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let output_dir = config.output_dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
output_dir    = {output_dir}
tools_version = {tools_version}

[generation]
name        = {name}
platforms   = {platforms}
interactive = {interactive}

[output]
verbose = {verbose}",
        tools_version = show_version(config.tools_version),
        name = show_str(config.generation.name.as_deref(), DEFAULT_PACKAGE_NAME),
        platforms = show_specs(config.generation.platforms.as_deref()),
        interactive = show_bool(config.generation.interactive, false),
        verbose = show_bool(config.output.verbose, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

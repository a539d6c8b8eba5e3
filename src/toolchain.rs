//! Installed-toolchain probing for the default tools version.
//!
//! The probe sits behind the narrow [`ToolsVersionProbe`] trait so the
//! core never depends on an external process: callers inject a probe (or
//! none) and the package model falls back to its built-in default when
//! probing yields nothing. Resolution order at the CLI is flag > config
//! file > probe > default.

use std::process::Command;

use regex::Regex;

/// A source for the default manifest tools version.
pub trait ToolsVersionProbe {
    /// The tools version the environment suggests, if any.
    fn default_tools_version(&self) -> Option<f64>;
}

/// Probe that asks the installed `swift` binary for its version.
#[derive(Debug, Default)]
pub struct SwiftToolchain;

impl ToolsVersionProbe for SwiftToolchain {
    /// Run `swift --version` and extract the reported version.
    ///
    /// Any failure — binary missing, non-UTF-8 output, unrecognized
    /// format — yields `None`, letting the caller fall back to the
    /// default constant.
    fn default_tools_version(&self) -> Option<f64> {
        let output = Command::new("swift").arg("--version").output().ok()?;
        let stdout = String::from_utf8(output.stdout).ok()?;
        parse_tools_version(&stdout)
    }
}

/// Extract a major.minor tools version from `swift --version` output.
///
/// Accepts both the Apple form (`Apple Swift version 5.9.2 ...`) and the
/// open-source form (`Swift version 6.0 ...`); a patch component is
/// trimmed to major.minor.
#[must_use]
pub fn parse_tools_version(output: &str) -> Option<f64> {
    let pattern = Regex::new(r"Swift version (\d+)\.(\d+)").ok()?;
    let captures = pattern.captures(output)?;
    format!("{}.{}", &captures[1], &captures[2]).parse().ok()
}

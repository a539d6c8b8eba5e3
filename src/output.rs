//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, all human-readable output (colors,
//! prompts, summaries) is suppressed and a single JSON document
//! describing the generated package is printed to stdout.

use std::path::Path;

use serde::Serialize;

use crate::package::{PackageModel, Platform};

/// Top-level JSON document emitted when `--json` is active.
#[derive(Serialize)]
pub struct JsonOutput {
    /// The execution mode: `"dry_run"` or `"generate"`.
    pub mode: String,

    /// Normalized package name (spaces replaced by underscores).
    pub package_name: String,

    /// Path of the written package root. Absent in dry-run mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_path: Option<String>,

    /// The effective manifest tools version.
    pub tools_version: f64,

    /// Platform constraints in model order.
    pub platforms: Vec<JsonPlatformEntry>,

    /// Names of the source files included in the package.
    pub source_files: Vec<String>,

    /// The full manifest text that was (or would be) written.
    pub manifest: String,
}

/// One platform constraint in the JSON output.
#[derive(Serialize)]
pub struct JsonPlatformEntry {
    /// Platform kind (`"iOS"`, `"macOS"`, ...).
    pub platform: Platform,

    /// Minimum supported version.
    pub min_version: f64,
}

impl JsonOutput {
    /// Build a document for a dry run, where nothing was written.
    #[must_use]
    pub fn from_dry_run(model: &PackageModel, manifest: &str) -> Self {
        Self::build("dry_run", model, None, manifest)
    }

    /// Build a document for a completed generation.
    #[must_use]
    pub fn from_generated(model: &PackageModel, package_path: &Path, manifest: &str) -> Self {
        Self::build("generate", model, Some(package_path), manifest)
    }

    fn build(mode: &str, model: &PackageModel, path: Option<&Path>, manifest: &str) -> Self {
        Self {
            mode: mode.to_string(),
            package_name: model.normalized_name(),
            package_path: path.map(|p| p.display().to_string()),
            tools_version: model.tools_version(),
            platforms: model
                .platforms()
                .iter()
                .map(|constraint| JsonPlatformEntry {
                    platform: constraint.platform,
                    min_version: constraint.min_version,
                })
                .collect(),
            source_files: model
                .source_files()
                .iter()
                .map(|file| file.name.clone())
                .collect(),
            manifest: manifest.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::SourceFile;
    use crate::package::manifest::render;

    fn sample_model() -> PackageModel {
        let files = vec![SourceFile::new("Main.swift", b"print(1)".to_vec())];
        PackageModel::new("My Tool")
            .with_selection(&files, &["Main.swift".to_string()])
            .with_platform(Platform::Ios, true, 13.0)
    }

    #[test]
    fn test_dry_run_output_has_no_path() {
        let model = sample_model();
        let manifest = render(&model);
        let output = JsonOutput::from_dry_run(&model, &manifest);

        assert_eq!(output.mode, "dry_run");
        assert_eq!(output.package_name, "My_Tool");
        assert!(output.package_path.is_none());
        assert_eq!(output.source_files, vec!["Main.swift".to_string()]);
    }

    #[test]
    fn test_generated_output_serializes_platforms() {
        let model = sample_model();
        let manifest = render(&model);
        let output = JsonOutput::from_generated(&model, Path::new("/tmp/My_Tool"), &manifest);

        let json = serde_json::to_string(&output).expect("serialize");
        assert!(json.contains("\"mode\":\"generate\""));
        assert!(json.contains("\"package_path\":\"/tmp/My_Tool\""));
        assert!(json.contains("\"platform\":\"iOS\""));
    }
}

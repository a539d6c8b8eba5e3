//! Deterministic `Package.swift` rendering.
//!
//! Rendering is a pure function of the [`PackageModel`]: no I/O, no
//! failure mode. The output must match the structure the Swift package
//! resolver expects byte for byte, so the template and the version
//! formatting rules below are fixed contracts, not style choices.

use super::model::{PackageModel, PlatformConstraint};

/// File name the manifest is written under inside the package root.
pub const MANIFEST_FILE_NAME: &str = "Package.swift";

/// Directory under the package root that holds the target's sources.
pub const SOURCES_DIR_NAME: &str = "Sources";

/// Render a package model into manifest text.
///
/// The normalized package name (spaces replaced by underscores) is
/// embedded in the package declaration, the library product name, the
/// product's target list, and the target's name and source path. The
/// dependency and resource lists always render empty; emitting them is
/// out of scope for this tool.
///
/// Duplicate platform kinds are not merged: each constraint renders as
/// its own entry, in model order.
#[must_use]
pub fn render(model: &PackageModel) -> String {
    let name = model.normalized_name();
    let tools = format_tools_version(model.tools_version());
    let platforms = render_platforms(model.platforms());

    format!(
        r#"// swift-tools-version: {tools}
import PackageDescription

let package = Package(
    name: "{name}",
    platforms: {platforms},
    products: [
        .library(
            name: "{name}",
            targets: ["{name}"]
        ),
    ],
    dependencies: [],
    targets: [
        .target(
            name: "{name}",
            dependencies: [],
            path: "{SOURCES_DIR_NAME}/{name}",
            resources: []
        )
    ]
)
"#
    )
}

/// Render the platform list block.
///
/// Entries are joined by a comma plus newline, with no trailing
/// separator. An empty list renders as an empty bracketed block.
fn render_platforms(constraints: &[PlatformConstraint]) -> String {
    if constraints.is_empty() {
        return "[]".to_string();
    }

    let entries: Vec<String> = constraints
        .iter()
        .map(|constraint| format!("        {}", render_platform_entry(constraint)))
        .collect();

    format!("[\n{}\n    ]", entries.join(",\n"))
}

/// Render a single platform entry, e.g. `.iOS(.v13)` or `.tvOS(.v13.0)`.
fn render_platform_entry(constraint: &PlatformConstraint) -> String {
    let version = if constraint.platform.keeps_full_decimal() {
        format_full_decimal(constraint.min_version)
    } else {
        format_stripped(constraint.min_version)
    };

    format!("{}(.v{version})", constraint.platform.identifier())
}

/// Format a version with any trailing `.0` stripped: `13.0` → `13`,
/// `13.5` → `13.5`.
fn format_stripped(version: f64) -> String {
    format!("{version}")
}

/// Format a version keeping at least one decimal place: `13.0` → `13.0`,
/// `13.5` → `13.5`.
fn format_full_decimal(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("{version:.1}")
    } else {
        format!("{version}")
    }
}

/// Format the tools version for the header line.
///
/// The header always carries a decimal form (`6.0`, `5.9`), matching how
/// the tools version is displayed everywhere else.
fn format_tools_version(version: f64) -> String {
    format_full_decimal(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::model::{Platform, SourceFile};

    fn model_with_platforms(constraints: &[(Platform, f64)]) -> PackageModel {
        let mut model = PackageModel::new("Demo");
        for &(platform, version) in constraints {
            model = model.with_platform(platform, true, version);
        }
        model
    }

    #[test]
    fn test_header_carries_default_tools_version() {
        let rendered = render(&PackageModel::new("Demo"));
        assert!(rendered.starts_with("// swift-tools-version: 6.0\n"));
    }

    #[test]
    fn test_header_carries_explicit_tools_version() {
        let model = PackageModel::new("Demo").with_tools_version(Some(5.9));
        let rendered = render(&model);
        assert!(rendered.starts_with("// swift-tools-version: 5.9\n"));
    }

    #[test]
    fn test_name_normalization_everywhere() {
        let rendered = render(&PackageModel::new("My Tool"));

        assert!(!rendered.contains("My Tool"));
        // Package name, product name, product target list, target name,
        // target source path.
        assert_eq!(rendered.matches("My_Tool").count(), 5);
        assert!(rendered.contains("name: \"My_Tool\","));
        assert!(rendered.contains("targets: [\"My_Tool\"]"));
        assert!(rendered.contains("path: \"Sources/My_Tool\""));
    }

    #[test]
    fn test_trailing_zero_stripped_for_most_platforms() {
        let rendered = render(&model_with_platforms(&[
            (Platform::Ios, 13.0),
            (Platform::MacOs, 11.0),
            (Platform::WatchOs, 6.0),
        ]));

        assert!(rendered.contains(".iOS(.v13)"));
        assert!(rendered.contains(".macOS(.v11)"));
        assert!(rendered.contains(".watchOS(.v6)"));
    }

    #[test]
    fn test_fractional_versions_kept() {
        let rendered = render(&model_with_platforms(&[(Platform::Ios, 13.5)]));
        assert!(rendered.contains(".iOS(.v13.5)"));
    }

    #[test]
    fn test_tvos_keeps_full_decimal() {
        let rendered = render(&model_with_platforms(&[(Platform::TvOs, 13.0)]));
        assert!(rendered.contains(".tvOS(.v13.0)"));
        assert!(!rendered.contains(".tvOS(.v13)\n"));
    }

    #[test]
    fn test_platform_entries_in_model_order() {
        let rendered = render(&model_with_platforms(&[
            (Platform::WatchOs, 6.0),
            (Platform::Ios, 13.0),
        ]));

        let watch_pos = rendered.find(".watchOS").expect("watchOS entry");
        let ios_pos = rendered.find(".iOS").expect("iOS entry");
        assert!(watch_pos < ios_pos);
    }

    #[test]
    fn test_platform_separator_has_no_trailing_comma() {
        let rendered = render(&model_with_platforms(&[
            (Platform::Ios, 13.0),
            (Platform::MacOs, 11.0),
        ]));

        assert!(rendered.contains(".iOS(.v13),\n"));
        assert!(rendered.contains(".macOS(.v11)\n"));
        assert!(!rendered.contains(".macOS(.v11),"));
    }

    #[test]
    fn test_empty_platform_list_renders_empty_block() {
        let rendered = render(&PackageModel::new("Demo"));
        assert!(rendered.contains("platforms: [],\n"));
    }

    #[test]
    fn test_duplicate_platform_kinds_render_as_separate_entries() {
        // The model's toggle prevents duplicates, but the renderer itself
        // tolerates them and emits one entry per constraint.
        use crate::package::model::PlatformConstraint;

        let block = render_platforms(&[
            PlatformConstraint::new(Platform::MacOs, 11.0),
            PlatformConstraint::new(Platform::MacOs, 12.0),
        ]);

        assert_eq!(block.matches(".macOS").count(), 2);
        assert!(block.contains(".macOS(.v11),\n"));
        assert!(block.contains(".macOS(.v12)\n"));
    }

    #[test]
    fn test_dependencies_and_resources_always_empty() {
        let mut model = PackageModel::new("Demo");
        model = model.with_selection(
            &[SourceFile::new("main.swift", b"print(1)".to_vec())],
            &["main.swift".to_string()],
        );

        let rendered = render(&model);
        assert!(rendered.contains("dependencies: [],"));
        assert!(rendered.contains("resources: []"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = model_with_platforms(&[(Platform::Ios, 13.0), (Platform::TvOs, 13.0)]);
        assert_eq!(render(&model), render(&model));
    }

    #[test]
    fn test_version_formatting_helpers() {
        assert_eq!(format_stripped(13.0), "13");
        assert_eq!(format_stripped(13.5), "13.5");
        assert_eq!(format_full_decimal(13.0), "13.0");
        assert_eq!(format_full_decimal(13.5), "13.5");
        assert_eq!(format_tools_version(6.0), "6.0");
    }
}

//! Core package data structures and types.
//!
//! This module defines the data structures that describe a package being
//! assembled: its source files, target platforms, and tools version.
//! The [`PackageModel`] is immutable-with-replacement: every operation
//! consumes the model and returns an updated value, so the caller always
//! owns exactly one current description.

use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use serde::Serialize;

/// Default manifest tools version used when neither the user nor the
/// installed toolchain provides one.
pub const DEFAULT_TOOLS_VERSION: f64 = 6.0;

/// Default package name used when the user provides none.
pub const DEFAULT_PACKAGE_NAME: &str = "My Swift Package";

/// A source file eligible for inclusion in a package.
///
/// Identity for selection-set membership is name plus content. Names must
/// be unique within a package; the materializer writes each file under
/// its own name with no collision handling.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SourceFile {
    /// File name including extension (e.g. `Parser.swift`)
    pub name: String,

    /// Full byte content of the file
    pub contents: Vec<u8>,
}

impl SourceFile {
    /// Create a new source file from a name and its content.
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Enumeration of the Swift package platforms a manifest can target.
///
/// This is a closed set: the renderer and the CLI match on it
/// exhaustively. Each platform carries the default minimum version the
/// selection UI pre-fills.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Platform {
    /// iOS devices
    #[serde(rename = "iOS")]
    Ios,

    /// macOS desktops
    #[serde(rename = "macOS")]
    MacOs,

    /// iPad apps running on macOS
    #[serde(rename = "macCatalyst")]
    MacCatalyst,

    /// DriverKit system extensions
    #[serde(rename = "driverKit")]
    DriverKit,

    /// Apple TV
    #[serde(rename = "tvOS")]
    TvOs,

    /// Vision Pro headsets
    #[serde(rename = "visionOS")]
    VisionOs,

    /// Apple Watch
    #[serde(rename = "watchOS")]
    WatchOs,
}

impl Platform {
    /// All platforms in the order the selection UI presents them.
    pub const ALL: [Self; 7] = [
        Self::Ios,
        Self::MacOs,
        Self::MacCatalyst,
        Self::DriverKit,
        Self::TvOs,
        Self::VisionOs,
        Self::WatchOs,
    ];

    /// The manifest identifier for this platform, including the leading dot.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Ios => ".iOS",
            Self::MacOs => ".macOS",
            Self::MacCatalyst => ".macCatalyst",
            Self::DriverKit => ".driverKit",
            Self::TvOs => ".tvOS",
            Self::VisionOs => ".visionOS",
            Self::WatchOs => ".watchOS",
        }
    }

    /// The default minimum version offered for this platform.
    #[must_use]
    pub const fn default_version(self) -> f64 {
        match self {
            Self::Ios | Self::MacCatalyst | Self::TvOs => 13.0,
            Self::MacOs => 11.0,
            Self::DriverKit => 19.0,
            Self::VisionOs => 1.0,
            Self::WatchOs => 6.0,
        }
    }

    /// Whether this platform's version renders as a full decimal.
    ///
    /// tvOS entries always keep the decimal form (`.tvOS(.v13.0)`); every
    /// other platform strips a trailing `.0` (`.iOS(.v13)`).
    #[must_use]
    pub const fn keeps_full_decimal(self) -> bool {
        matches!(self, Self::TvOs)
    }
}

impl Display for Platform {
    /// Format the platform under its conventional name (e.g. `iOS`).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // identifier() minus the leading dot
        write!(f, "{}", &self.identifier()[1..])
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Parse a platform from its case-insensitive name (e.g. `ios`, `macOS`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "macos" => Ok(Self::MacOs),
            "maccatalyst" => Ok(Self::MacCatalyst),
            "driverkit" => Ok(Self::DriverKit),
            "tvos" => Ok(Self::TvOs),
            "visionos" => Ok(Self::VisionOs),
            "watchos" => Ok(Self::WatchOs),
            other => Err(format!(
                "unknown platform '{other}' (expected one of: ios, macos, maccatalyst, driverkit, tvos, visionos, watchos)"
            )),
        }
    }
}

/// A minimum-version constraint for one target platform.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct PlatformConstraint {
    /// The target platform
    pub platform: Platform,

    /// Minimum supported version as a decimal (e.g. `13.0`, `13.5`)
    pub min_version: f64,
}

impl PlatformConstraint {
    /// Create a constraint for a platform with an explicit minimum version.
    #[must_use]
    pub const fn new(platform: Platform, min_version: f64) -> Self {
        Self {
            platform,
            min_version,
        }
    }

    /// Create a constraint using the platform's default minimum version.
    #[must_use]
    pub const fn with_default_version(platform: Platform) -> Self {
        Self::new(platform, platform.default_version())
    }
}

/// The in-memory description of the package being assembled.
///
/// Built once a non-empty file selection exists, updated by replacement
/// as the user toggles files, platforms, name, and tools version, and
/// consumed read-only by the renderer. The model itself is never
/// persisted; only its rendering and its source files reach the disk.
#[derive(Clone, PartialEq, Debug)]
pub struct PackageModel {
    name: String,
    source_files: Vec<SourceFile>,
    platforms: Vec<PlatformConstraint>,
    tools_version: Option<f64>,
}

impl PackageModel {
    /// Create an empty model with the given package name.
    ///
    /// An empty name falls back to [`DEFAULT_PACKAGE_NAME`], so the name
    /// is never empty by the time the model reaches the renderer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.is_empty() {
            DEFAULT_PACKAGE_NAME.to_string()
        } else {
            name
        };

        Self {
            name,
            source_files: Vec::new(),
            platforms: Vec::new(),
            tools_version: None,
        }
    }

    /// The package name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package name with spaces replaced by underscores.
    ///
    /// This is the single naming-normalization rule, applied everywhere
    /// the name is emitted: the manifest and the on-disk directory names.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.replace(' ', "_")
    }

    /// The selected source files, in selection order.
    #[must_use]
    pub fn source_files(&self) -> &[SourceFile] {
        &self.source_files
    }

    /// The platform constraints, in model order.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformConstraint] {
        &self.platforms
    }

    /// The effective tools version, defaulting to [`DEFAULT_TOOLS_VERSION`].
    #[must_use]
    pub fn tools_version(&self) -> f64 {
        self.tools_version.unwrap_or(DEFAULT_TOOLS_VERSION)
    }

    /// Replace the package name, keeping everything else.
    ///
    /// An empty name falls back to [`DEFAULT_PACKAGE_NAME`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() {
            DEFAULT_PACKAGE_NAME.to_string()
        } else {
            name
        };
        self
    }

    /// Replace the source-file selection.
    ///
    /// The new selection is exactly the subsequence of `all_files` whose
    /// names appear in `selected_names`, preserving the original order of
    /// `all_files` (not the order names were selected in).
    #[must_use]
    pub fn with_selection(mut self, all_files: &[SourceFile], selected_names: &[String]) -> Self {
        self.source_files = all_files
            .iter()
            .filter(|file| selected_names.iter().any(|name| *name == file.name))
            .cloned()
            .collect();
        self
    }

    /// Toggle a platform constraint.
    ///
    /// When `enabled` is `false`, any existing constraint of that kind is
    /// removed. When `true`, an existing constraint of that kind has its
    /// version replaced in place; otherwise the constraint is appended.
    /// The toggle is idempotent and last-write-wins per platform kind.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform, enabled: bool, min_version: f64) -> Self {
        if enabled {
            if let Some(existing) = self
                .platforms
                .iter_mut()
                .find(|constraint| constraint.platform == platform)
            {
                existing.min_version = min_version;
            } else {
                self.platforms
                    .push(PlatformConstraint::new(platform, min_version));
            }
        } else {
            self.platforms
                .retain(|constraint| constraint.platform != platform);
        }
        self
    }

    /// Replace the tools version. `None` restores the default.
    #[must_use]
    pub const fn with_tools_version(mut self, tools_version: Option<f64>) -> Self {
        self.tools_version = tools_version;
        self
    }
}

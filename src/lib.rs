//! # packagify
//!
//! Turn loose Swift source files (or a folder of them) into a minimally
//! valid Swift Package Manager project.
//!
//! The pipeline: input paths are classified (source file, folder,
//! other), a folder's Swift files are collected, the user's selection
//! and platform/tools-version choices populate a [`package::PackageModel`],
//! the model renders deterministically into `Package.swift` text, and
//! the materializer writes the manifest plus `Sources/<Name>/*` to disk.
//!
//! ## Features
//!
//! - Mixed inputs: individual `.swift` files or a whole folder
//! - Interactive file and platform selection
//! - Deterministic manifest rendering with fixed formatting rules
//! - Toolchain probing for the default tools version
//! - Dry-run preview and hand-edited manifest export
//! - JSON output for scripting
//! - Persistent configuration via `~/.config/packagify/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Package a folder of Swift files
//! packagify ~/Sources/MyLib --name MyLib --platform ios=13 --platform macos
//!
//! # Pick files interactively and preview the manifest
//! packagify a.swift b.swift -i --dry-run
//!
//! # Start with an empty source file
//! packagify --empty --name Scratch
//! ```

pub mod classifier;
pub mod collector;
pub mod config;
pub mod error;
pub mod materializer;
pub mod output;
pub mod package;
pub mod toolchain;

pub use classifier::{Entry, classify};
pub use collector::{Collected, collect_from_paths, collect_source_files};
pub use error::{AccessError, FilesystemError};
pub use materializer::materialize;
pub use package::{PackageModel, Platform, PlatformConstraint, SourceFile};
pub use toolchain::{SwiftToolchain, ToolsVersionProbe};

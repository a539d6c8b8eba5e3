//! Writing the assembled package to disk.
//!
//! The materializer turns manifest text plus a [`PackageModel`] into the
//! conventional on-disk layout:
//!
//! ```text
//! <Name>/
//! ├── Package.swift
//! └── Sources/
//!     └── <Name>/
//!         └── *.swift
//! ```
//!
//! The manifest argument is whatever text the caller currently holds —
//! a hand-edited manifest is written verbatim — while the source files
//! written are always exactly the model's selection, independent of any
//! manifest edits.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::package::PackageModel;
use crate::package::manifest::{MANIFEST_FILE_NAME, SOURCES_DIR_NAME};

/// Write the package directory tree under `destination`.
///
/// Steps, in order: remove a stale package directory at the target path
/// if one exists, create the package root (with intermediate
/// directories), write the manifest, create `Sources/<Name>/`, write
/// every selected source file under its own name. Because the stale
/// directory is removed first, re-running with an unchanged model
/// overwrites rather than accumulates.
///
/// Returns the package root path for a downstream export or copy step.
///
/// # Errors
///
/// Returns a [`FilesystemError`] naming the failing step and path. The
/// materializer aborts on the first failure and does not roll back
/// partially written state; the caller is responsible for cleanup before
/// a retry.
pub fn materialize(
    manifest: &str,
    model: &PackageModel,
    destination: &Path,
) -> Result<PathBuf, FilesystemError> {
    let name = model.normalized_name();
    let package_root = destination.join(&name);

    if package_root.exists() {
        fs::remove_dir_all(&package_root).map_err(|source| FilesystemError::RemoveStale {
            path: package_root.clone(),
            source,
        })?;
    }

    fs::create_dir_all(&package_root).map_err(|source| FilesystemError::CreateDir {
        path: package_root.clone(),
        source,
    })?;

    let manifest_path = package_root.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, manifest).map_err(|source| FilesystemError::WriteFile {
        path: manifest_path,
        source,
    })?;

    let sources_dir = package_root.join(SOURCES_DIR_NAME).join(&name);
    fs::create_dir_all(&sources_dir).map_err(|source| FilesystemError::CreateDir {
        path: sources_dir.clone(),
        source,
    })?;

    for file in model.source_files() {
        let file_path = sources_dir.join(&file.name);
        fs::write(&file_path, &file.contents).map_err(|source| FilesystemError::WriteFile {
            path: file_path,
            source,
        })?;
    }

    Ok(package_root)
}

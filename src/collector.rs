//! Source-file collection from folders and dropped path batches.
//!
//! Two entry points: [`collect_source_files`] extracts the Swift files
//! directly inside one folder, and [`collect_from_paths`] reduces a
//! batch of independently classified paths (CLI arguments, file-picker
//! results) to a single file set under the "directory wins" rule.
//!
//! Per-file read failures never abort a collection; they are returned in
//! [`Collected::skipped`] so the caller can report them instead of the
//! errors being silently discarded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::{Entry, classify, has_source_extension};
use crate::error::AccessError;
use crate::package::SourceFile;

/// Marker prefix of hidden directory entries.
const HIDDEN_PREFIX: char = '.';

/// The outcome of a collection: the extracted files plus any entries
/// that were skipped because they could not be read.
#[derive(Debug, Default)]
pub struct Collected {
    /// Extracted source files, in enumeration order
    pub files: Vec<SourceFile>,

    /// Per-entry failures that were skipped over
    pub skipped: Vec<AccessError>,
}

/// Extract the Swift source files directly inside a directory.
///
/// Lists the immediate children only (no recursion; nested folders are
/// not descended into), skipping hidden entries and subdirectories. The
/// resulting order is filesystem enumeration order: stable for an
/// unchanged directory snapshot, but not sorted — callers must not
/// depend on anything beyond that.
///
/// Files that match the source extension but fail to read are skipped,
/// with the failure recorded in [`Collected::skipped`].
///
/// # Errors
///
/// Returns [`AccessError::List`] when the directory itself cannot be
/// listed. Individual unreadable files do not fail the collection.
pub fn collect_source_files(directory: &Path) -> Result<Collected, AccessError> {
    let entries = fs::read_dir(directory).map_err(|source| AccessError::List {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut collected = Collected::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                collected.skipped.push(AccessError::List {
                    path: directory.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_hidden(&name) || path.is_dir() || !has_source_extension(&path) {
            continue;
        }

        match fs::read(&path) {
            Ok(contents) => collected.files.push(SourceFile::new(name, contents)),
            Err(source) => collected.skipped.push(AccessError::Read { path, source }),
        }
    }

    Ok(collected)
}

/// Reduce a batch of dropped paths to a single source-file set.
///
/// Each path is classified independently, in order. The reduction rule:
///
/// - If any path classifies as a directory, the result is **that single
///   directory's extracted source files only** — every other path in the
///   batch, including source files classified before it, is discarded.
/// - Otherwise the result is all source files among the paths, in batch
///   order. Other files are dropped.
///
/// The directory rule short-circuits: paths after the first directory
/// are never classified. This is the specified multi-path policy for
/// every entry point (arguments, picker, open-with), not an accident of
/// one of them.
///
/// A path that fails to classify disqualifies only itself; the failure
/// is recorded in [`Collected::skipped`] and the batch continues.
///
/// # Errors
///
/// Returns [`AccessError::List`] when the winning directory cannot be
/// listed, since that directory is the entire result.
pub fn collect_from_paths(paths: &[PathBuf]) -> Result<Collected, AccessError> {
    let mut collected = Collected::default();

    for path in paths {
        match classify(path) {
            Ok(Entry::Directory { path, .. }) => return collect_source_files(&path),
            Ok(Entry::Source(file)) => collected.files.push(file),
            Ok(Entry::Other { .. }) => {}
            Err(error) => collected.skipped.push(error),
        }
    }

    Ok(collected)
}

/// Whether a directory entry name marks a hidden entry.
fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".hidden.swift"));
        assert!(is_hidden(".git"));
        assert!(!is_hidden("visible.swift"));
        assert!(!is_hidden("dotted.name.swift"));
    }

    #[test]
    fn test_collect_from_empty_batch() {
        let collected = collect_from_paths(&[]).expect("empty batch collects");
        assert!(collected.files.is_empty());
        assert!(collected.skipped.is_empty());
    }

    #[test]
    fn test_unreadable_path_disqualifies_only_itself() {
        let paths = vec![PathBuf::from("/nonexistent/missing.swift")];
        let collected = collect_from_paths(&paths).expect("batch survives a bad entry");

        assert!(collected.files.is_empty());
        assert_eq!(collected.skipped.len(), 1);
        assert!(matches!(collected.skipped[0], AccessError::Read { .. }));
    }

    #[test]
    fn test_listing_missing_directory_fails() {
        let result = collect_source_files(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(AccessError::List { .. })));
    }
}

//! Filesystem entry classification.
//!
//! Every input path, whether dropped on the CLI as an argument or found
//! inside a folder, goes through [`classify`] first. The result is a
//! closed [`Entry`] sum type: a Swift source file (with its bytes), a
//! directory (traversal deferred to the collector), or anything else.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AccessError;
use crate::package::SourceFile;

/// File extension that marks a file as a Swift source file.
pub const SOURCE_EXTENSION: &str = "swift";

/// A classified filesystem entry.
///
/// Immutable; produced by [`classify`] and consumed by the collector's
/// batch reduction. Source and Other entries carry their full byte
/// content, directories defer traversal.
#[derive(Debug)]
pub enum Entry {
    /// A Swift source file and its content
    Source(SourceFile),

    /// A directory, to be handed to the collector for extraction
    Directory {
        /// Directory name (last path component)
        name: String,

        /// Full path for later listing
        path: PathBuf,
    },

    /// Any other file; read but not eligible for inclusion
    Other {
        /// File name (last path component)
        name: String,

        /// Full byte content of the file
        contents: Vec<u8>,
    },
}

/// Classify a filesystem path.
///
/// A path that exists as a directory classifies as [`Entry::Directory`]
/// without being read. Otherwise the full content is read and the entry
/// is [`Entry::Source`] when the extension matches [`SOURCE_EXTENSION`]
/// (case-insensitively), or [`Entry::Other`] for everything else.
///
/// # Errors
///
/// Returns [`AccessError::Read`] when the content cannot be read
/// (missing file, permissions). The error is propagated as-is; there is
/// no retry.
pub fn classify(path: &Path) -> Result<Entry, AccessError> {
    let name = file_name_of(path);

    if path.is_dir() {
        return Ok(Entry::Directory {
            name,
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read(path).map_err(|source| AccessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if has_source_extension(path) {
        Ok(Entry::Source(SourceFile::new(name, contents)))
    } else {
        Ok(Entry::Other { name, contents })
    }
}

/// Whether the path carries the Swift source extension, ignoring case.
#[must_use]
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// The last path component as a string, lossily converted.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(has_source_extension(Path::new("Main.swift")));
        assert!(has_source_extension(Path::new("Main.SWIFT")));
        assert!(has_source_extension(Path::new("Main.Swift")));
        assert!(!has_source_extension(Path::new("Main.rs")));
        assert!(!has_source_extension(Path::new("Mainswift")));
        assert!(!has_source_extension(Path::new("swift")));
    }

    #[test]
    fn test_file_name_of_plain_paths() {
        assert_eq!(file_name_of(Path::new("/a/b/Main.swift")), "Main.swift");
        assert_eq!(file_name_of(Path::new("Main.swift")), "Main.swift");
        assert_eq!(file_name_of(Path::new("/")), "");
    }

    #[test]
    fn test_classify_missing_path_is_read_error() {
        let result = classify(Path::new("/nonexistent/definitely-missing.swift"));
        assert!(matches!(result, Err(AccessError::Read { .. })));
    }
}

//! Typed errors for the package-assembly core.
//!
//! The core distinguishes two failure domains: acquiring input files
//! ([`AccessError`]) and writing the generated package tree
//! ([`FilesystemError`]). Both carry the failing path and the underlying
//! I/O cause. The CLI layer wraps them in `anyhow` for display.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A filesystem path could not be read or listed.
///
/// Raised during classification (single-file reads) and collection
/// (directory listing and per-file reads). The operation that produced
/// the error returns no partial result for the affected path.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The file at `path` could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The directory at `path` could not be listed.
    #[error("cannot list directory {path}: {source}")]
    List {
        /// The directory that failed to list.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl AccessError {
    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::List { path, .. } => path,
        }
    }
}

/// A step of package materialization failed.
///
/// Materialization aborts on the first failed step and performs no
/// rollback; partially written state is the caller's to clean up.
#[derive(Debug, Error)]
pub enum FilesystemError {
    /// A stale package directory existed at the target path and could
    /// not be removed.
    #[error("cannot remove stale package directory {path}: {source}")]
    RemoveStale {
        /// The stale directory.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory of the package tree could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// The directory that failed to create.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The manifest or a source file could not be written.
    #[error("cannot write {path}: {source}")]
    WriteFile {
        /// The file that failed to write.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

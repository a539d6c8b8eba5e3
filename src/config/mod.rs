//! Persistent configuration support.
//!
//! Configuration lives in a TOML file and provides defaults that CLI
//! arguments override. See [`file::FileConfig`] for the file format.

pub mod file;

pub use file::FileConfig;

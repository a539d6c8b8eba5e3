//! Package description and manifest rendering.
//!
//! This module contains the in-memory representation of a Swift package
//! and the logic that turns it into manifest text.
//!
//! ## Main Parts
//!
//! - [`SourceFile`] - A named source file with its byte content
//! - [`Platform`] - The closed set of Swift package platforms
//! - [`PlatformConstraint`] - A (platform, minimum version) pair
//! - [`PackageModel`] - The package description built from user choices
//! - [`manifest::render`] - Deterministic `Package.swift` rendering

pub mod manifest;
pub mod model;

pub use model::{PackageModel, Platform, PlatformConstraint, SourceFile};

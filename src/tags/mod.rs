//! Remote tag listing and latest-release resolution
//!
//! This module decides, per repository, which release tag is "latest". Raw
//! refs come from a [`source::TagSource`] (network I/O), get narrowed to
//! exact `vX.Y.Z` tags, and the maximum under semver ordering wins.
//!
//! # Modules
//!
//! - [`error`]: Error types for tag listing
//! - [`release`]: Strict `vX.Y.Z` release-tag parsing
//! - [`resolver`]: Latest release tag selection
//! - [`source`]: `TagSource` trait for listing remote tags
//! - [`sources`]: Concrete tag sources (`git ls-remote`)
//! - [`types`]: Raw ref listing type

pub mod error;
pub mod release;
pub mod resolver;
pub mod source;
pub mod sources;
pub mod types;

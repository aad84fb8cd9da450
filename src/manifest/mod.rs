//! Manifest assembly and serialization
//!
//! # Modules
//!
//! - [`builder`]: per-repository resolution into ordered entries
//! - [`error`]: manifest error types
//! - [`writer`]: JSON serialization to the output file

pub mod builder;
pub mod error;
pub mod writer;

use serde::{Deserialize, Serialize};

/// One manifest record mapping a repository to its pinned reference.
///
/// `branch` holds either a rendered release tag (`v15.2.0`) or the fallback
/// branch name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub git_url: String,
    pub branch: String,
}

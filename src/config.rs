use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Branch substituted when a repository has no release tags.
pub const DEFAULT_BRANCH: &str = "main";

/// Default manifest path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "apps.json";

/// Environment variable consulted for a version hint when `--major` is absent.
pub const VERSION_ENV: &str = "TAG_MANIFEST_VERSION";

/// Repositories tracked when no config file is given.
const DEFAULT_REPOS: [&str; 8] = [
    "https://github.com/frappe/erpnext",
    "https://github.com/frappe/hrms",
    "https://github.com/frappe/crm",
    "https://github.com/frappe/helpdesk",
    "https://github.com/frappe/drive",
    "https://github.com/frappe/insights",
    "https://github.com/frappe/builder",
    "https://github.com/frappe/lms",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What to do when a repository's tag listing fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole run without writing a manifest.
    #[default]
    Abort,
    /// Substitute the fallback branch and keep going.
    Fallback,
}

/// Manifest build configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestConfig {
    /// Repositories to resolve, in output order
    pub repos: Vec<String>,
    /// Manifest output path
    pub output: PathBuf,
    /// Policy for unreachable repositories
    pub on_error: FailurePolicy,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            repos: DEFAULT_REPOS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            on_error: FailurePolicy::default(),
        }
    }
}

impl ManifestConfig {
    /// Loads configuration from a JSON file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Extracts a major-version filter from a free-form version hint.
///
/// The first run of decimal digits wins, so "version-15" and "15.2-beta"
/// both yield 15. An absent hint, a hint without digits, or a digit run too
/// large for a u64 means no filter.
pub fn major_from_hint(hint: Option<&str>) -> Option<u64> {
    static DIGITS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d+").expect("Failed to compile digit pattern"));

    DIGITS.find(hint?)?.as_str().parse().ok()
}

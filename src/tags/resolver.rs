//! Latest release tag resolution

use semver::Version;
use tracing::{debug, warn};

use crate::tags::error::TagSourceError;
use crate::tags::release;
use crate::tags::source::TagSource;

/// Resolves the latest release tag of a remote repository.
pub struct TagResolver<S> {
    source: S,
}

impl<S: TagSource> TagResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the latest release version for `repo`.
    ///
    /// When `major` is given, tags of that major version are preferred; if
    /// none exist the filter widens back to all release tags. `Ok(None)`
    /// means the repository has no release tags at all, while transport
    /// failures propagate as errors.
    pub async fn resolve(
        &self,
        repo: &str,
        major: Option<u64>,
    ) -> Result<Option<Version>, TagSourceError> {
        let listing = self.source.list_tags(repo).await?;

        let candidates: Vec<Version> = listing.tag_names().filter_map(release::parse).collect();
        debug!("{}: {} release tags", repo, candidates.len());

        if candidates.is_empty() {
            return Ok(None);
        }

        let pool: Vec<&Version> = match major {
            Some(major) => {
                let matching: Vec<&Version> =
                    candidates.iter().filter(|v| v.major == major).collect();
                if matching.is_empty() {
                    warn!("{}: no v{}.x.y tags, widening to all majors", repo, major);
                    candidates.iter().collect()
                } else {
                    matching
                }
            }
            None => candidates.iter().collect(),
        };

        Ok(pool.into_iter().max().cloned())
    }
}

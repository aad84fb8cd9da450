//! Manifest assembly from per-repository tag resolution

use tracing::{info, warn};

use crate::config::{DEFAULT_BRANCH, FailurePolicy};
use crate::manifest::ManifestEntry;
use crate::manifest::error::ManifestError;
use crate::tags::release;
use crate::tags::resolver::TagResolver;
use crate::tags::source::TagSource;

/// Builds the ordered manifest, one entry per configured repository.
pub struct ManifestBuilder<S> {
    resolver: TagResolver<S>,
    on_error: FailurePolicy,
}

impl<S: TagSource> ManifestBuilder<S> {
    pub fn new(source: S, on_error: FailurePolicy) -> Self {
        Self {
            resolver: TagResolver::new(source),
            on_error,
        }
    }

    /// Resolves each repository in order and collects the manifest entries.
    ///
    /// Repositories without release tags are pinned to the fallback branch.
    /// A failed tag listing either aborts the whole build
    /// ([`FailurePolicy::Abort`]) or degrades that entry to the fallback
    /// branch ([`FailurePolicy::Fallback`]).
    pub async fn build(
        &self,
        repos: &[String],
        major: Option<u64>,
    ) -> Result<Vec<ManifestEntry>, ManifestError> {
        let mut entries = Vec::with_capacity(repos.len());

        for repo in repos {
            let branch = match self.resolver.resolve(repo, major).await {
                Ok(Some(version)) => release::render(&version),
                Ok(None) => DEFAULT_BRANCH.to_string(),
                Err(source) => match self.on_error {
                    FailurePolicy::Abort => {
                        return Err(ManifestError::Resolve {
                            repo: repo.clone(),
                            source,
                        });
                    }
                    FailurePolicy::Fallback => {
                        warn!(
                            "{}: tag listing failed ({}), using {}",
                            repo, source, DEFAULT_BRANCH
                        );
                        DEFAULT_BRANCH.to_string()
                    }
                },
            };

            info!("{} -> {}", repo, branch);
            entries.push(ManifestEntry {
                git_url: repo.clone(),
                branch,
            });
        }

        Ok(entries)
    }
}

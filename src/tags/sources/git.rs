//! `git ls-remote` tag source

use tokio::process::Command;
use tracing::debug;

use crate::tags::error::TagSourceError;
use crate::tags::source::TagSource;
use crate::tags::types::RefListing;

/// Lists remote tags by shelling out to `git ls-remote --tags`.
///
/// One process per query, no retries. A non-zero exit status surfaces as
/// [`TagSourceError::CommandFailed`] with git's stderr attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLsRemote;

#[async_trait::async_trait]
impl TagSource for GitLsRemote {
    async fn list_tags(&self, repo: &str) -> Result<RefListing, TagSourceError> {
        debug!("Listing tags of {}", repo);

        let output = Command::new("git")
            .args(["ls-remote", "--tags", repo])
            .output()
            .await?;

        if !output.status.success() {
            return Err(TagSourceError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Invalid UTF-8 bytes cannot occur inside a well-formed vX.Y.Z ref,
        // so lossy decoding only affects records the filter drops anyway.
        Ok(RefListing::new(String::from_utf8_lossy(&output.stdout)))
    }
}

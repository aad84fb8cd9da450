//! Tag listing seam for remote repositories

#[cfg(test)]
use mockall::automock;

use crate::tags::error::TagSourceError;
use crate::tags::types::RefListing;

/// Trait for listing the tags of a remote repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSource: Send + Sync {
    /// Lists raw tag refs for a repository
    ///
    /// # Arguments
    /// * `repo` - The repository URL to query
    ///
    /// # Returns
    /// * `Ok(RefListing)` - Raw `<oid>\t<ref>` records from the remote
    /// * `Err(TagSourceError)` - If the listing process fails
    async fn list_tags(&self, repo: &str) -> Result<RefListing, TagSourceError>;
}

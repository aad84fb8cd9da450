use thiserror::Error;

use crate::tags::error::TagSourceError;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to resolve {repo}: {source}")]
    Resolve {
        repo: String,
        source: TagSourceError,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

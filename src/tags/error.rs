use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagSourceError {
    #[error("Process error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tag listing exited with code {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },
}

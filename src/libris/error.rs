use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Book with id {0} not found")]
    NotFound(u64),

    #[error("Malformed library data in {}: {source}", .path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No ids left to assign after {0}")]
    IdsExhausted(u64),

    #[error("Invalid id: {0:?} is not a positive integer")]
    InvalidId(String),

    #[error("Invalid status: {0:?} (expected 'available' or 'checked_out')")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl LibrisError {
    /// Errors a session can report and then carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LibrisError::NotFound(_) | LibrisError::InvalidId(_) | LibrisError::InvalidStatus(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;

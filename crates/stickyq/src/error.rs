use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickyError {
    /// The underlying store rejected a write. Never retried or masked.
    #[error("Write to '{key}' failed: {reason}")]
    Write { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for StickyError {
    fn from(err: confique::Error) -> Self {
        StickyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StickyError>;

//! Storage errors

use feed_core::DomainError;

/// Error type for file storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found")]
    NotFound,

    #[error("Upload is not a decodable image")]
    InvalidImage,

    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::FileNotFound,
            StorageError::InvalidImage => Self::InvalidImage,
            other => Self::StorageError(other.to_string()),
        }
    }
}

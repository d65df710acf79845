use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Underlying storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Record not found error
    #[error("Checkup not found: {0}")]
    NotFound(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}

use thiserror::Error;

/// Errors raised by a movie store.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Failure kinds of the catalog operations.
///
/// Each variant carries the message shown to the caller; the variant itself
/// is the kind the HTTP layer maps to a status code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The request is malformed, e.g. a non-positive id.
    #[error("{0}")]
    BadRequest(String),
    /// No movie exists with the requested id.
    #[error("{0}")]
    NotFound(String),
    /// A movie with the same title and director already exists.
    #[error("{0}")]
    Duplicate(String),
    /// Release year outside the accepted range.
    #[error("{0}")]
    InvalidYear(String),
    /// IMDb rating outside the accepted range.
    #[error("{0}")]
    InvalidRating(String),
    /// A required text field is empty.
    #[error("{0}")]
    Validation(String),
    /// The catalog holds no movies at all.
    #[error("{0}")]
    EmptyResult(String),
    /// The movie to delete does not exist.
    #[error("{0}")]
    DeletionFailure(String),
    /// Writing a movie to the store failed.
    #[error("{0}")]
    Persistence(String),
    /// The delete call itself failed after the existence check passed.
    #[error("{0}")]
    AlreadyDeleted(String),
    /// Any other failure, typically a store error on a read path.
    #[error("{0}")]
    Unexpected(String),
}

impl From<StorageError> for CatalogError {
    fn from(value: StorageError) -> Self {
        Self::Unexpected(value.to_string())
    }
}

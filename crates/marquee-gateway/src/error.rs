use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The request body could not be decoded into a movie request.
    #[error("{0}")]
    MalformedBody(String),
    /// The path id is not an integer.
    #[error("{0}")]
    MalformedPath(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedPath(rejection.body_text())
    }
}

/// Status code and plain-text body for an error.
///
/// `None` as body means the response carries no content.
pub fn status_and_message(error: &AppError) -> (StatusCode, Option<String>) {
    match error {
        AppError::Catalog(kind) => match kind {
            CatalogError::NotFound(message) => (StatusCode::NOT_FOUND, Some(message.clone())),
            CatalogError::BadRequest(message)
            | CatalogError::InvalidYear(message)
            | CatalogError::InvalidRating(message)
            | CatalogError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Some(message.clone()))
            }
            CatalogError::Duplicate(message) => (StatusCode::CONFLICT, Some(message.clone())),
            CatalogError::EmptyResult(_) => (StatusCode::NO_CONTENT, None),
            CatalogError::DeletionFailure(message) | CatalogError::Persistence(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(message.clone()))
            }
            CatalogError::AlreadyDeleted(message) | CatalogError::Unexpected(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(format!("An unexpected error occurred: {message}")),
            ),
        },
        AppError::MalformedBody(message) | AppError::MalformedPath(message) => {
            (StatusCode::BAD_REQUEST, Some(message.clone()))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self);

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        match message {
            Some(message) => (status, message).into_response(),
            None => status.into_response(),
        }
    }
}

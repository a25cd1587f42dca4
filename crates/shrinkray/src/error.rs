//! HTTP error mapping.
//!
//! Every error surfaces as a plain-text body plus a status code; nothing
//! internal beyond the error string is exposed.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use shrinkray_core::{BatchError, PackageError};
use thiserror::Error;

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-level errors with their user-visible messages.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Neither URLs nor uploads in the request
    #[error("No images provided.")]
    NoInput,

    /// The width field is not a positive integer
    #[error("Invalid width provided.")]
    InvalidWidth,

    /// Every requested item failed to fetch or decode
    #[error("No images could be processed.")]
    AllFailed,

    /// The form payload could not be parsed
    #[error("Malformed form data: {0}")]
    BadForm(String),

    /// Packaging the response failed; the one fatal mode
    #[error("An error occurred during processing: {0}")]
    Package(#[from] PackageError),
}

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::NoInput => ApiError::NoInput,
            BatchError::InvalidWidth(_) => ApiError::InvalidWidth,
            BatchError::AllFailed => ApiError::AllFailed,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Package(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoInput
            | ApiError::InvalidWidth
            | ApiError::AllFailed
            | ApiError::BadForm(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidWidth.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::AllFailed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Package(PackageError::Encode {
                name: "x.jpg".into(),
                message: "boom".into()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_exact_user_visible_messages() {
        assert_eq!(ApiError::NoInput.to_string(), "No images provided.");
        assert_eq!(ApiError::InvalidWidth.to_string(), "Invalid width provided.");
        assert_eq!(
            ApiError::AllFailed.to_string(),
            "No images could be processed."
        );
    }

    #[test]
    fn test_batch_error_conversion() {
        assert!(matches!(
            ApiError::from(BatchError::InvalidWidth("abc".into())),
            ApiError::InvalidWidth
        ));
        assert!(matches!(ApiError::from(BatchError::NoInput), ApiError::NoInput));
        assert!(matches!(
            ApiError::from(BatchError::AllFailed),
            ApiError::AllFailed
        ));
    }
}

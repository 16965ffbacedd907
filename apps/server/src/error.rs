//! Service error type and its mapping onto HTTP responses.
//!
//! The core has exactly one error of its own; everything here is boundary
//! failure (content type, encoding, size, multipart shape) mapped onto
//! `{code, message}` JSON payloads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::responses::{ErrorResponse, codes};

/// Content type required for the uploaded file part.
pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("expected content type '{TEXT_PLAIN}', got '{0}'")]
    IncorrectRequestType(String),

    #[error("multipart request has no part named 'file'")]
    MissingFilePart,

    #[error(
        "the uploaded file could not be decoded; send a UTF-8 encoded plain text file"
    )]
    IncorrectEncoding,

    #[error("upload exceeds the configured size limit")]
    SizeLimitExceeded,

    #[error("malformed multipart request: {0}")]
    MalformedRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::IncorrectRequestType(_) => (
                StatusCode::BAD_REQUEST,
                codes::INCORRECT_REQUEST_TYPE,
                self.to_string(),
            ),
            Self::MissingFilePart => (
                StatusCode::BAD_REQUEST,
                codes::MISSING_FILE_PART,
                self.to_string(),
            ),
            Self::IncorrectEncoding => (
                StatusCode::BAD_REQUEST,
                codes::INCORRECT_ENCODING_OR_FILE,
                self.to_string(),
            ),
            Self::SizeLimitExceeded => (
                StatusCode::PAYLOAD_TOO_LARGE,
                codes::SIZE_LIMIT_EXCEEDED,
                self.to_string(),
            ),
            Self::MalformedRequest(_) => (
                StatusCode::BAD_REQUEST,
                codes::MALFORMED_REQUEST,
                self.to_string(),
            ),
            Self::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    codes::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Map a multipart read failure onto the service error space.
pub fn from_multipart(err: axum::extract::multipart::MultipartError) -> ServiceError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::SizeLimitExceeded
    } else {
        ServiceError::MalformedRequest(err.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

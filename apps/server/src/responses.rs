//! JSON payload shapes for the upload endpoint.
//!
//! Success carries the rendered HTML in `data`; every failure carries a
//! stable machine-readable `code` plus a human-readable `message`.

use serde::{Deserialize, Serialize};

/// Response codes returned by the service.
pub mod codes {
    pub const SUCCESS: &str = "SUCCESS";
    pub const INCORRECT_REQUEST_TYPE: &str = "INCORRECT_REQUEST_TYPE";
    pub const INCORRECT_ENCODING_OR_FILE: &str = "INCORRECT_ENCODING_OR_FILE";
    pub const MISSING_FILE_PART: &str = "MISSING_FILE_PART";
    pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";
    pub const SIZE_LIMIT_EXCEEDED: &str = "SIZE_LIMIT_EXCEEDED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
}

/// Successful parse: `{code: "SUCCESS", data: <HTML string>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSuccessResponse {
    pub code: String,
    pub data: String,
}

impl ParseSuccessResponse {
    pub fn new(data: String) -> Self {
        Self {
            code: codes::SUCCESS.to_string(),
            data,
        }
    }
}

/// Any failure: `{code, message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

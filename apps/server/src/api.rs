//! HTTP handlers for the file parsing endpoint.
//!
//! The service owns everything the core does not: multipart extraction,
//! content-type validation, the temporary-file lifecycle, byte decoding,
//! line splitting, and the mapping of failures onto `{code, message}`
//! payloads.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, ServiceError, TEXT_PLAIN, from_multipart};
use crate::responses::{ErrorResponse, ParseSuccessResponse, codes};
use crate::state::AppState;

/// `POST /api/v1/files/parser` — parse an uploaded plain text file into the
/// sectioned HTML document.
pub async fn parse_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseSuccessResponse>> {
    let mut file_part = None;

    while let Some(field) = multipart.next_field().await.map_err(from_multipart)? {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(from_multipart)?;
            file_part = Some((content_type, bytes));
            break;
        }
    }

    let (content_type, bytes) = file_part.ok_or(ServiceError::MissingFilePart)?;

    match content_type.as_deref() {
        Some(TEXT_PLAIN) => {}
        other => {
            tracing::error!(
                content_type = other.unwrap_or("none"),
                "invalid content type in the request"
            );
            return Err(ServiceError::IncorrectRequestType(
                other.unwrap_or("none").to_string(),
            ));
        }
    }

    debug!(size = bytes.len(), "file part received");

    let marker = state.marker;
    let html = tokio::task::spawn_blocking(move || spool_and_parse(&bytes, marker))
        .await
        .map_err(|e| ServiceError::Internal(format!("parse task failed: {e}")))??;

    info!(html_len = html.len(), "upload parsed");

    Ok(Json(ParseSuccessResponse::new(html)))
}

/// Spool the upload to a uuid-named temporary file, read it back, decode,
/// split, and run the parser. The file is removed when the guard drops,
/// request outcome notwithstanding.
fn spool_and_parse(bytes: &[u8], marker: char) -> Result<String> {
    let temp = tempfile::Builder::new()
        .prefix(&Uuid::now_v7().to_string())
        .suffix(".txt")
        .tempfile()
        .map_err(|e| ServiceError::Internal(format!("failed to create a temporary file: {e}")))?;

    std::fs::write(temp.path(), bytes)
        .map_err(|e| ServiceError::Internal(format!("failed to write the upload: {e}")))?;

    let raw = std::fs::read(temp.path())
        .map_err(|e| ServiceError::Internal(format!("failed to read the upload back: {e}")))?;

    let text = String::from_utf8(raw).map_err(|_| ServiceError::IncorrectEncoding)?;
    let lines = tocify_core::split_lines(&text);

    tocify_core::parse_to_html(Some(&lines), marker)
        .map_err(|e| ServiceError::Internal(e.to_string()))
}

/// `GET /health` — liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Fallback for unknown routes: JSON 404 instead of an empty body.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            codes::NOT_FOUND,
            "no handler for the requested path",
        )),
    )
}

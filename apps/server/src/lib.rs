//! tocify upload service — HTTP boundary around the parser core.
//!
//! Exposes one endpoint that accepts a `text/plain` file upload and returns
//! the rendered HTML document in a JSON envelope. All request decoding,
//! validation, and error-to-status mapping lives here; the core stays pure.

pub mod api;
pub mod error;
pub mod responses;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/v1/files/parser", post(api::parse_file))
        .route("/health", get(api::health_check))
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

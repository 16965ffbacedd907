//! Shared application state handed to request handlers.

/// Immutable per-process state. Cheap to clone; handlers never mutate it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Marker character forwarded to the parser core.
    pub marker: char,
}

impl AppState {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }
}

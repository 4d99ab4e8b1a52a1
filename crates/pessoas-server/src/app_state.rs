// ABOUTME: Shared application state for the pessoas HTTP server.
// ABOUTME: Holds the record store handle that every handler uses.

use std::sync::Arc;

use pessoas_store::RecordStore;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub store: RecordStore,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

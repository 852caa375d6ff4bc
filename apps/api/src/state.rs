use std::sync::Arc;

use crate::recommendation::store::QueryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable query store. Default: SqliteQueryStore.
    pub store: Arc<dyn QueryStore>,
}

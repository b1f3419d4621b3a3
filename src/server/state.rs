use crate::AsyncArmory;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The store. Dispatches blocking DuckDB work to a thread pool
    /// internally.
    pub store: AsyncArmory,
}

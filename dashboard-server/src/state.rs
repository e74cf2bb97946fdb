//! Application state for dashboard-server

use std::sync::Arc;

use shared::db::Database;

/// Shared application state
///
/// Holds connection parameters only; every request opens its own
/// connection through [`Database`].
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}

//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds the database connection pool and the public base
//! URL used when rendering problem details.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL without a trailing slash.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Application base URL
    pub fn new(db: DatabaseConnection, app_url: String) -> Self {
        Self { db, app_url }
    }
}

//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::model::availability::RoomReleasePolicy;

/// Application state containing shared resources.
///
/// Cheap to clone: `DatabaseConnection` is a pool handle and the policy is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Policy for re-deriving room status after a reservation is cancelled.
    pub release_policy: RoomReleasePolicy,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `release_policy` - Configured room release policy
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, release_policy: RoomReleasePolicy) -> Self {
        Self { db, release_policy }
    }
}

//! Application State Management
//!
//! `AppState` is the central state container handed to the router. The
//! `FromRef` implementations let handlers extract just the part they need;
//! most store-only handlers take `State<SqlitePool>` directly.

use std::path::PathBuf;

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all request handlers
///
/// There is deliberately no cached network base path in here: the
/// synchronizer re-reads it from the configuration store on every operation
/// so runtime config changes apply immediately.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (embedded SQLite)
    pub db: SqlitePool,

    /// Root of the local upload area
    ///
    /// The upload subsystem stores files here and records URLs under
    /// `/uploads/...`; the synchronizer resolves those URLs against this
    /// root when sweeping files into the network folder.
    pub uploads_root: PathBuf,
}

/// Allow handlers to extract the pool without the full state
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

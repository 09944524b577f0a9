//! Server Initialization
//!
//! Builds the application: database pool + migrations, uploads root,
//! `AppState`, router.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app() -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("initializing werkstatt backend");

    let db = config::load_database().await?;
    let uploads_root = config::uploads_root();
    tracing::info!("serving uploads from {}", uploads_root.display());

    let state = AppState { db, uploads_root };
    Ok(create_router(state))
}

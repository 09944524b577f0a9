//! Router Configuration
//!
//! Combines the API route table with the static uploads service and the
//! fallback handler.

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// - `/api/...` - order, document, network folder and configuration endpoints
/// - `/uploads` - static service over the local upload area
/// - fallback  - plain 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.nest_service("/uploads", ServeDir::new(app_state.uploads_root.clone()));

    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}

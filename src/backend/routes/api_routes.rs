//! API Route Table
//!
//! All `/api` endpoints. Handlers are thin pass-throughs to the order
//! store, the workflow, the synchronizer and the configuration store; the
//! only business rules living in them are request validation and status
//! mapping.
//!
//! # Routes
//!
//! ## Orders
//! - `GET    /api/orders` - list (filters: client_id, status, order_type)
//! - `POST   /api/orders` - create (+ best-effort folder mirror)
//! - `GET    /api/orders/lookup/{code}` - barcode lookup (number or id)
//! - `GET    /api/orders/{id}` - detail with documents and components
//! - `PUT    /api/orders/{id}` - field-level merge update / client resubmit
//! - `DELETE /api/orders/{id}` - admin delete, cascading
//! - `PUT    /api/orders/{id}/status` - workflow transition
//!
//! ## Network folder
//! - `POST /api/orders/{id}/network-folder` - create/repair the folder
//! - `GET  /api/orders/{id}/network-folder` - bookkeeping vs. disk status
//! - `POST /api/orders/{id}/migrate-files` - re-run the file sweep
//!
//! ## Documents and components
//! - `POST   /api/orders/{id}/documents` - register an uploaded file
//! - `DELETE /api/documents/{id}`
//! - `POST   /api/orders/{id}/components`
//! - `DELETE /api/components/{id}`
//! - `POST   /api/components/{id}/documents`
//!
//! ## System configuration
//! - `GET/PUT /api/system-config/{key}`
//! - `POST    /api/system-config/test-path` - reachability/writability probe
//!
//! ## Misc
//! - `GET /api/health` - liveness probe

use axum::Json;
use axum::Router;

use crate::backend::documents::handlers::{
    create_component, delete_component, delete_document, register_component_document,
    register_document,
};
use crate::backend::netfolder::handlers::{
    create_network_folder, migrate_order_files, network_folder_status,
};
use crate::backend::orders::handlers::{
    change_status, create_order, delete_order, get_order, list_orders, lookup_order, update_order,
};
use crate::backend::server::state::AppState;
use crate::backend::sysconfig::handlers::{get_config, set_config, test_path};

/// Configure the API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/health", axum::routing::get(health))
        // Orders
        .route(
            "/api/orders",
            axum::routing::get(list_orders).post(create_order),
        )
        .route("/api/orders/lookup/{code}", axum::routing::get(lookup_order))
        .route(
            "/api/orders/{id}",
            axum::routing::get(get_order)
                .put(update_order)
                .delete(delete_order),
        )
        .route("/api/orders/{id}/status", axum::routing::put(change_status))
        // Network folder
        .route(
            "/api/orders/{id}/network-folder",
            axum::routing::post(create_network_folder).get(network_folder_status),
        )
        .route(
            "/api/orders/{id}/migrate-files",
            axum::routing::post(migrate_order_files),
        )
        // Documents and components
        .route(
            "/api/orders/{id}/documents",
            axum::routing::post(register_document),
        )
        .route("/api/documents/{id}", axum::routing::delete(delete_document))
        .route(
            "/api/orders/{id}/components",
            axum::routing::post(create_component),
        )
        .route(
            "/api/components/{id}",
            axum::routing::delete(delete_component),
        )
        .route(
            "/api/components/{id}/documents",
            axum::routing::post(register_component_document),
        )
        // System configuration
        .route(
            "/api/system-config/test-path",
            axum::routing::post(test_path),
        )
        .route(
            "/api/system-config/{key}",
            axum::routing::get(get_config).put(set_config),
        )
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

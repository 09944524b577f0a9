//! Network Folder HTTP Handlers
//!
//! Expected domain outcomes (not configured, base path unreachable, partial
//! migration) come back as 200 with `success: false` or a non-empty error
//! list; only a missing order is an actual API error.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::orders;
use crate::backend::server::state::AppState;
use crate::shared::netfolder::{FolderOutcome, FolderStatus, MigrationOutcome};

use super::sync;

/// Create (or repair) the order's network folder
pub async fn create_network_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderOutcome>, ApiError> {
    let order = orders::db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let outcome = sync::ensure_order_folder(&state.db, &state.uploads_root, &order).await;
    Ok(Json(outcome))
}

/// Report bookkeeping vs. on-disk state of the order's folder
pub async fn network_folder_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderStatus>, ApiError> {
    let order = orders::db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    Ok(Json(sync::folder_status(&order)))
}

/// Manually re-run the file sweep for an order
///
/// Runs the full ensure step, which is safe to repeat: folder creation and
/// copies are idempotent, and already-placed files are skipped.
pub async fn migrate_order_files(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MigrationOutcome>, ApiError> {
    let order = orders::db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let outcome = sync::ensure_order_folder(&state.db, &state.uploads_root, &order).await;
    Ok(Json(MigrationOutcome {
        success: outcome.success,
        message: outcome.message,
        report: outcome.migration.unwrap_or_default(),
    }))
}

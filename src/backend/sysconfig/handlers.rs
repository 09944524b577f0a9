//! System Configuration HTTP Handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::backend::error::ApiError;
use crate::backend::netfolder;
use crate::backend::server::state::AppState;
use crate::shared::netfolder::{PathProbe, TestPathRequest};
use crate::shared::sysconfig::{GetConfigResponse, SetConfigRequest, SetConfigResponse};

use super::db;

/// Read one configuration value
pub async fn get_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetConfigResponse>, ApiError> {
    let entry = db::get_entry(&state.db, &key).await?;
    Ok(Json(GetConfigResponse {
        key,
        configured: entry.is_some(),
        value: entry.map(|e| e.value),
    }))
}

/// Set a configuration value; the stored (normalized) entry is echoed back
///
/// A set of `NETWORK_BASE_PATH` takes effect immediately: the synchronizer
/// resolves the path from the store on every operation.
pub async fn set_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<SetConfigRequest>,
) -> Result<Json<SetConfigResponse>, ApiError> {
    let entry = db::set_entry(
        &state.db,
        &key,
        &request.value,
        request.description.as_deref(),
        request.updated_by.as_deref(),
        Utc::now(),
    )
    .await?;

    tracing::info!("config '{}' set to '{}'", entry.key, entry.value);

    Ok(Json(SetConfigResponse {
        success: true,
        entry,
    }))
}

/// Probe a base path for reachability and writability
///
/// With no path in the body, the currently configured base path is probed.
/// An unconfigured path probes as neither reachable nor writable.
pub async fn test_path(
    State(state): State<AppState>,
    Json(request): Json<TestPathRequest>,
) -> Result<Json<PathProbe>, ApiError> {
    let path = match request.path {
        Some(path) if !path.trim().is_empty() => Some(path),
        _ => netfolder::sync::resolve_base_path(&state.db).await,
    };

    let probe = match path {
        Some(path) => netfolder::sync::test_path(&path),
        None => PathProbe {
            reachable: false,
            writable: false,
        },
    };

    Ok(Json(probe))
}

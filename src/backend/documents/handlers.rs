//! Document and Component HTTP Handlers
//!
//! Registration and deletion of uploaded-file metadata. Validation here is
//! limited to existence of the owning entity and non-blank titles; the
//! records otherwise pass straight through to the store.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::orders;
use crate::shared::orders::component::{
    CreateComponentRequest, CreateComponentResponse, RegisterComponentDocumentResponse,
};
use crate::shared::orders::document::{RegisterDocumentRequest, RegisterDocumentResponse};
use crate::shared::orders::requests::DeleteResponse;

use super::db;

/// Register an uploaded file on an order
pub async fn register_document(
    State(pool): State<SqlitePool>,
    Path(order_id): Path<Uuid>,
    Json(request): Json<RegisterDocumentRequest>,
) -> Result<Json<RegisterDocumentResponse>, ApiError> {
    orders::db::get_order(&pool, order_id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let document =
        db::add_document(&pool, order_id, &request.name, &request.url, Utc::now()).await?;

    Ok(Json(RegisterDocumentResponse {
        success: true,
        document,
    }))
}

/// Delete an order-level document record
pub async fn delete_document(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !db::delete_document(&pool, id).await? {
        return Err(ApiError::NotFound("document"));
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// Create a component on an order
pub async fn create_component(
    State(pool): State<SqlitePool>,
    Path(order_id): Path<Uuid>,
    Json(request): Json<CreateComponentRequest>,
) -> Result<Json<CreateComponentResponse>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Component title must not be empty"));
    }

    orders::db::get_order(&pool, order_id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let component = db::add_component(
        &pool,
        order_id,
        &request.title,
        &request.description,
        Utc::now(),
    )
    .await?;

    Ok(Json(CreateComponentResponse {
        success: true,
        component,
    }))
}

/// Delete a component and its document records
pub async fn delete_component(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !db::delete_component(&pool, id).await? {
        return Err(ApiError::NotFound("component"));
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// Register an uploaded file on a component
pub async fn register_component_document(
    State(pool): State<SqlitePool>,
    Path(component_id): Path<Uuid>,
    Json(request): Json<RegisterDocumentRequest>,
) -> Result<Json<RegisterComponentDocumentResponse>, ApiError> {
    db::get_component(&pool, component_id)
        .await?
        .ok_or(ApiError::NotFound("component"))?;

    let document =
        db::add_component_document(&pool, component_id, &request.name, &request.url, Utc::now())
            .await?;

    Ok(Json(RegisterComponentDocumentResponse {
        success: true,
        document,
    }))
}

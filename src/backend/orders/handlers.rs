//! Order HTTP Handlers
//!
//! Thin translations from HTTP to the order store and the workflow. The one
//! piece of orchestration living here is order creation: after the store
//! write succeeds, the network folder synchronizer runs best-effort and its
//! outcome rides along in the response; a failed folder step never fails
//! the creation.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::documents;
use crate::backend::error::ApiError;
use crate::backend::netfolder;
use crate::backend::server::state::AppState;
use crate::shared::orders::requests::{CreateOrderResponse, DeleteResponse, ListOrdersResponse};
use crate::shared::orders::{
    ComponentWithDocuments, CreateOrderRequest, ListOrdersQuery, Order, OrderDetailResponse,
    OrderResponse, OrderStatus, StatusChangeRequest, UpdateOrderRequest,
};

use super::db;
use super::workflow::{self, Actor, OrderAction};

/// List orders, newest first, with optional filters
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let orders = db::list_orders(&state.db, &query).await?;
    Ok(Json(ListOrdersResponse { orders }))
}

/// Create an order and trigger the best-effort folder mirror
pub async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    draft.validate()?;

    let order = db::create_order(&state.db, &draft, Utc::now()).await?;
    tracing::info!("created order {} ({})", order.order_number, order.id);

    let outcome =
        netfolder::sync::ensure_order_folder(&state.db, &state.uploads_root, &order).await;
    if !outcome.success {
        tracing::warn!(
            "network folder for order {} not created: {}",
            order.order_number,
            outcome.message
        );
    }

    // The synchronizer may have stamped the bookkeeping fields
    let order = db::get_order(&state.db, order.id).await?.unwrap_or(order);

    Ok(Json(CreateOrderResponse {
        success: true,
        order,
        network_folder: Some(outcome),
    }))
}

/// Fetch one order with its documents and components
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let order = db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;
    order_detail(&state, order).await
}

/// Barcode lookup: `code` is an order number or an order id
pub async fn lookup_order(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let order = db::find_order_by_number_or_id(&state.db, &code)
        .await?
        .ok_or(ApiError::NotFound("order"))?;
    order_detail(&state, order).await
}

async fn order_detail(
    state: &AppState,
    order: Order,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let docs = documents::db::list_documents_for_order(&state.db, order.id).await?;
    let components = documents::db::list_components_for_order(&state.db, order.id).await?;

    let mut with_docs = Vec::with_capacity(components.len());
    for component in components {
        let documents =
            documents::db::list_component_documents(&state.db, component.id).await?;
        with_docs.push(ComponentWithDocuments {
            component,
            documents,
        });
    }

    Ok(Json(OrderDetailResponse {
        order,
        documents: docs,
        components: with_docs,
    }))
}

/// Field-level merge update
///
/// `status` is only honored for the client's revision→pending resubmit;
/// every other transition has to go through the status endpoint so the
/// workflow cannot be bypassed by a plain update.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let mut order = db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let now = Utc::now();
    if let Some(target) = update.status {
        if order.status == OrderStatus::Revision && target == OrderStatus::Pending {
            workflow::apply(&mut order, &OrderAction::Resubmit, &Actor::default(), now)?;
        } else if target != order.status {
            return Err(ApiError::validation(
                "Status changes must go through the status endpoint",
            ));
        }
    }

    update.apply_to(&mut order, now);
    db::update_order(&state.db, &order).await?;

    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// Workflow transition endpoint
pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusChangeRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let mut order = db::get_order(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("order"))?;

    let action = OrderAction::for_target(
        request.status,
        request.comment.as_deref(),
        request.confirmation_note.as_deref(),
    )?;
    let actor = Actor::from_parts(request.user_id, request.user_name);

    workflow::apply(&mut order, &action, &actor, Utc::now())?;
    db::update_order(&state.db, &order).await?;

    tracing::info!(
        "order {} moved to '{}' via '{}'",
        order.order_number,
        order.status,
        action.name()
    );

    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// Admin delete, cascading to documents and components
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = db::delete_order(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("order"));
    }
    Ok(Json(DeleteResponse { success: true }))
}

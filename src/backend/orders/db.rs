//! Database operations for orders
//!
//! The order row carries the embedded lists of the original document store
//! (sub tasks, both comment logs, note history) as JSON text columns; linked
//! documents and components live in their own tables (see
//! `backend::documents::db`).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::orders::{
    CreateOrderRequest, ListOrdersQuery, Order, OrderStatus, OrderType, Priority,
};

use super::numbering;

/// Attempts at minting an order number before giving up on unique conflicts
const CREATE_ATTEMPTS: u32 = 3;

const ORDER_COLUMNS: &str = "id, order_number, title, description, client_id, client_name, \
     deadline, cost_center, priority, status, estimated_hours, actual_hours, assigned_to, \
     notes, order_type, sub_tasks, revision_history, rework_comments, note_history, \
     confirmation_note, confirmation_date, can_edit, material_ordered_by_workshop, \
     material_ordered_by_client, material_ordered_by_client_confirmed, material_available, \
     title_image, network_path, network_folder_created, created_at, updated_at";

fn decode_list<T: DeserializeOwned>(raw: String) -> Vec<T> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn encode_list<T: Serialize>(list: &[T]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

fn order_from_row(row: &SqliteRow) -> Order {
    Order {
        id: row.get("id"),
        order_number: row.get("order_number"),
        title: row.get("title"),
        description: row.get("description"),
        client_id: row.get("client_id"),
        client_name: row.get("client_name"),
        deadline: row.get("deadline"),
        cost_center: row.get("cost_center"),
        priority: Priority::from_str(row.get::<String, _>("priority").as_str())
            .unwrap_or(Priority::Medium),
        status: OrderStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or(OrderStatus::Pending),
        estimated_hours: row.get("estimated_hours"),
        actual_hours: row.get("actual_hours"),
        assigned_to: row.get("assigned_to"),
        notes: row.get("notes"),
        order_type: OrderType::from_str(row.get::<String, _>("order_type").as_str())
            .unwrap_or(OrderType::Fertigung),
        sub_tasks: decode_list(row.get("sub_tasks")),
        revision_history: decode_list(row.get("revision_history")),
        rework_comments: decode_list(row.get("rework_comments")),
        note_history: decode_list(row.get("note_history")),
        confirmation_note: row.get("confirmation_note"),
        confirmation_date: row.get("confirmation_date"),
        can_edit: row.get("can_edit"),
        material_ordered_by_workshop: row.get("material_ordered_by_workshop"),
        material_ordered_by_client: row.get("material_ordered_by_client"),
        material_ordered_by_client_confirmed: row.get("material_ordered_by_client_confirmed"),
        material_available: row.get("material_available"),
        title_image: row.get("title_image"),
        network_path: row.get("network_path"),
        network_folder_created: row.get("network_folder_created"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a new order with a freshly minted order number
///
/// The number scan and the insert are not atomic; a concurrent create for
/// the same prefix+period can mint the same number. The UNIQUE constraint on
/// `order_number` catches that, and the scan is retried.
pub async fn create_order(
    pool: &SqlitePool,
    draft: &CreateOrderRequest,
    now: DateTime<Utc>,
) -> Result<Order, sqlx::Error> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let order_number = numbering::mint_order_number(pool, draft.order_type, now).await?;

        match insert_order(pool, draft, &order_number, now).await {
            Ok(order) => return Ok(order),
            Err(err) if attempt < CREATE_ATTEMPTS && is_unique_violation(&err) => {
                tracing::warn!(
                    "order number {} already taken, re-scanning (attempt {})",
                    order_number,
                    attempt
                );
            }
            Err(err) => return Err(err),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

async fn insert_order(
    pool: &SqlitePool,
    draft: &CreateOrderRequest,
    order_number: &str,
    now: DateTime<Utc>,
) -> Result<Order, sqlx::Error> {
    let order = Order {
        id: Uuid::new_v4(),
        order_number: order_number.to_string(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        client_id: draft.client_id.clone(),
        client_name: draft.client_name.clone(),
        deadline: draft.deadline,
        cost_center: draft.cost_center.clone(),
        priority: draft.priority,
        status: OrderStatus::Pending,
        estimated_hours: draft.estimated_hours,
        actual_hours: 0.0,
        assigned_to: draft.assigned_to.clone(),
        notes: draft.notes.clone(),
        order_type: draft.order_type,
        sub_tasks: draft.sub_tasks.clone(),
        revision_history: Vec::new(),
        rework_comments: Vec::new(),
        note_history: Vec::new(),
        confirmation_note: None,
        confirmation_date: None,
        can_edit: false,
        material_ordered_by_workshop: false,
        material_ordered_by_client: false,
        material_ordered_by_client_confirmed: false,
        material_available: false,
        title_image: draft.title_image.clone(),
        network_path: None,
        network_folder_created: false,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO orders (id, order_number, title, description, client_id, client_name,
            deadline, cost_center, priority, status, estimated_hours, actual_hours,
            assigned_to, notes, order_type, sub_tasks, revision_history, rework_comments,
            note_history, confirmation_note, confirmation_date, can_edit,
            material_ordered_by_workshop, material_ordered_by_client,
            material_ordered_by_client_confirmed, material_available, title_image,
            network_path, network_folder_created, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(order.id)
    .bind(&order.order_number)
    .bind(&order.title)
    .bind(&order.description)
    .bind(&order.client_id)
    .bind(&order.client_name)
    .bind(order.deadline)
    .bind(&order.cost_center)
    .bind(order.priority.as_str())
    .bind(order.status.as_str())
    .bind(order.estimated_hours)
    .bind(order.actual_hours)
    .bind(&order.assigned_to)
    .bind(&order.notes)
    .bind(order.order_type.as_str())
    .bind(encode_list(&order.sub_tasks))
    .bind(encode_list(&order.revision_history))
    .bind(encode_list(&order.rework_comments))
    .bind(encode_list(&order.note_history))
    .bind(&order.confirmation_note)
    .bind(order.confirmation_date)
    .bind(order.can_edit)
    .bind(order.material_ordered_by_workshop)
    .bind(order.material_ordered_by_client)
    .bind(order.material_ordered_by_client_confirmed)
    .bind(order.material_available)
    .bind(&order.title_image)
    .bind(&order.network_path)
    .bind(order.network_folder_created)
    .bind(order.created_at)
    .bind(order.updated_at)
    .execute(pool)
    .await?;

    Ok(order)
}

/// Get an order by id
pub async fn get_order(pool: &SqlitePool, id: Uuid) -> Result<Option<Order>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {} FROM orders WHERE id = ?", ORDER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| order_from_row(&r)))
}

/// Barcode lookup: resolve `code` as an order number first, then as an id
pub async fn find_order_by_number_or_id(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<Order>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM orders WHERE order_number = ?",
        ORDER_COLUMNS
    ))
    .bind(code)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = row {
        return Ok(Some(order_from_row(&row)));
    }

    match Uuid::parse_str(code) {
        Ok(id) => get_order(pool, id).await,
        Err(_) => Ok(None),
    }
}

/// List orders, newest first, with optional filters
pub async fn list_orders(
    pool: &SqlitePool,
    query: &ListOrdersQuery,
) -> Result<Vec<Order>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM orders \
         WHERE (?1 IS NULL OR client_id = ?1) \
           AND (?2 IS NULL OR status = ?2) \
           AND (?3 IS NULL OR order_type = ?3) \
         ORDER BY created_at DESC",
        ORDER_COLUMNS
    ))
    .bind(&query.client_id)
    .bind(query.status.map(|s| s.as_str()))
    .bind(query.order_type.map(|t| t.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(order_from_row).collect())
}

/// Persist a merged/transitioned order back to the store
///
/// The id, order number, client and creation timestamp are immutable; every
/// other column is written from the given struct.
pub async fn update_order(pool: &SqlitePool, order: &Order) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE orders SET
            title = ?, description = ?, deadline = ?, cost_center = ?, priority = ?,
            status = ?, estimated_hours = ?, actual_hours = ?, assigned_to = ?, notes = ?,
            sub_tasks = ?, revision_history = ?, rework_comments = ?, note_history = ?,
            confirmation_note = ?, confirmation_date = ?, can_edit = ?,
            material_ordered_by_workshop = ?, material_ordered_by_client = ?,
            material_ordered_by_client_confirmed = ?, material_available = ?,
            title_image = ?, network_path = ?, network_folder_created = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&order.title)
    .bind(&order.description)
    .bind(order.deadline)
    .bind(&order.cost_center)
    .bind(order.priority.as_str())
    .bind(order.status.as_str())
    .bind(order.estimated_hours)
    .bind(order.actual_hours)
    .bind(&order.assigned_to)
    .bind(&order.notes)
    .bind(encode_list(&order.sub_tasks))
    .bind(encode_list(&order.revision_history))
    .bind(encode_list(&order.rework_comments))
    .bind(encode_list(&order.note_history))
    .bind(&order.confirmation_note)
    .bind(order.confirmation_date)
    .bind(order.can_edit)
    .bind(order.material_ordered_by_workshop)
    .bind(order.material_ordered_by_client)
    .bind(order.material_ordered_by_client_confirmed)
    .bind(order.material_available)
    .bind(&order.title_image)
    .bind(&order.network_path)
    .bind(order.network_folder_created)
    .bind(order.updated_at)
    .bind(order.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Record the mirrored folder on the order (bookkeeping fields only)
pub async fn set_network_folder(
    pool: &SqlitePool,
    id: Uuid,
    path: &str,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE orders SET network_path = ?, network_folder_created = 1, updated_at = ? WHERE id = ?",
    )
    .bind(path)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete an order, cascading to its documents, components and their documents
///
/// Returns `false` when no such order exists (nothing is touched then).
pub async fn delete_order(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query(
        "DELETE FROM component_documents WHERE component_id IN \
         (SELECT id FROM components WHERE order_id = ?)",
    )
    .bind(id)
    .execute(pool)
    .await?;

    sqlx::query("DELETE FROM components WHERE order_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    sqlx::query("DELETE FROM documents WHERE order_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

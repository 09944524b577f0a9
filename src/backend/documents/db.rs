//! Database operations for documents and components

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::orders::{Component, ComponentDocument, Document};

/// Register an uploaded file on an order
pub async fn add_document(
    pool: &SqlitePool,
    order_id: Uuid,
    name: &str,
    url: &str,
    now: DateTime<Utc>,
) -> Result<Document, sqlx::Error> {
    let document = Document {
        id: Uuid::new_v4(),
        order_id,
        name: name.to_string(),
        url: url.to_string(),
        upload_date: now,
    };

    sqlx::query(
        "INSERT INTO documents (id, order_id, name, url, upload_date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(document.id)
    .bind(document.order_id)
    .bind(&document.name)
    .bind(&document.url)
    .bind(document.upload_date)
    .execute(pool)
    .await?;

    Ok(document)
}

/// All documents attached directly to an order, oldest first
pub async fn list_documents_for_order(
    pool: &SqlitePool,
    order_id: Uuid,
) -> Result<Vec<Document>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, order_id, name, url, upload_date FROM documents \
         WHERE order_id = ? ORDER BY upload_date ASC",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Document {
            id: row.get("id"),
            order_id: row.get("order_id"),
            name: row.get("name"),
            url: row.get("url"),
            upload_date: row.get("upload_date"),
        })
        .collect())
}

/// Delete one document; returns `false` when it does not exist
pub async fn delete_document(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM documents WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Create a component on an order
pub async fn add_component(
    pool: &SqlitePool,
    order_id: Uuid,
    title: &str,
    description: &str,
    now: DateTime<Utc>,
) -> Result<Component, sqlx::Error> {
    let component = Component {
        id: Uuid::new_v4(),
        order_id,
        title: title.to_string(),
        description: description.to_string(),
        created_at: now,
    };

    sqlx::query(
        "INSERT INTO components (id, order_id, title, description, created_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(component.id)
    .bind(component.order_id)
    .bind(&component.title)
    .bind(&component.description)
    .bind(component.created_at)
    .execute(pool)
    .await?;

    Ok(component)
}

/// Get a component by id
pub async fn get_component(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<Component>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, order_id, title, description, created_at FROM components WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Component {
        id: row.get("id"),
        order_id: row.get("order_id"),
        title: row.get("title"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }))
}

/// All components of an order, oldest first
pub async fn list_components_for_order(
    pool: &SqlitePool,
    order_id: Uuid,
) -> Result<Vec<Component>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, order_id, title, description, created_at FROM components \
         WHERE order_id = ? ORDER BY created_at ASC",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Component {
            id: row.get("id"),
            order_id: row.get("order_id"),
            title: row.get("title"),
            description: row.get("description"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Delete a component and its documents; returns `false` when it does not exist
pub async fn delete_component(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query("DELETE FROM component_documents WHERE component_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    let result = sqlx::query("DELETE FROM components WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Register an uploaded file on a component
pub async fn add_component_document(
    pool: &SqlitePool,
    component_id: Uuid,
    name: &str,
    url: &str,
    now: DateTime<Utc>,
) -> Result<ComponentDocument, sqlx::Error> {
    let document = ComponentDocument {
        id: Uuid::new_v4(),
        component_id,
        name: name.to_string(),
        url: url.to_string(),
        upload_date: now,
    };

    sqlx::query(
        "INSERT INTO component_documents (id, component_id, name, url, upload_date) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(document.id)
    .bind(document.component_id)
    .bind(&document.name)
    .bind(&document.url)
    .bind(document.upload_date)
    .execute(pool)
    .await?;

    Ok(document)
}

/// All documents of a component, oldest first
pub async fn list_component_documents(
    pool: &SqlitePool,
    component_id: Uuid,
) -> Result<Vec<ComponentDocument>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, component_id, name, url, upload_date FROM component_documents \
         WHERE component_id = ? ORDER BY upload_date ASC",
    )
    .bind(component_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ComponentDocument {
            id: row.get("id"),
            component_id: row.get("component_id"),
            name: row.get("name"),
            url: row.get("url"),
            upload_date: row.get("upload_date"),
        })
        .collect())
}

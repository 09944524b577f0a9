//! Database operations for system configuration

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::shared::sysconfig::{SystemConfigEntry, NETWORK_BASE_PATH_KEY};

use super::normalize::normalize_base_path;

/// Read one configuration entry
pub async fn get_entry(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<SystemConfigEntry>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT key, value, description, updated_at, updated_by FROM system_config WHERE key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| SystemConfigEntry {
        key: row.get("key"),
        value: row.get("value"),
        description: row.get("description"),
        updated_at: row.get("updated_at"),
        updated_by: row.get("updated_by"),
    }))
}

/// Upsert a configuration entry and echo the stored record
///
/// `NETWORK_BASE_PATH` values are normalized before storage. Description and
/// author fall back to the existing entry when not provided.
pub async fn set_entry(
    pool: &SqlitePool,
    key: &str,
    value: &str,
    description: Option<&str>,
    updated_by: Option<&str>,
    now: DateTime<Utc>,
) -> Result<SystemConfigEntry, sqlx::Error> {
    let value = if key == NETWORK_BASE_PATH_KEY {
        normalize_base_path(value)
    } else {
        value.to_string()
    };

    let existing = get_entry(pool, key).await?;
    let entry = SystemConfigEntry {
        key: key.to_string(),
        value,
        description: description
            .map(|d| d.to_string())
            .or(existing.as_ref().map(|e| e.description.clone()))
            .unwrap_or_default(),
        updated_at: now,
        updated_by: updated_by
            .map(|u| u.to_string())
            .or(existing.map(|e| e.updated_by))
            .unwrap_or_default(),
    };

    sqlx::query(
        r#"
        INSERT INTO system_config (key, value, description, updated_at, updated_by)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            description = excluded.description,
            updated_at = excluded.updated_at,
            updated_by = excluded.updated_by
        "#,
    )
    .bind(&entry.key)
    .bind(&entry.value)
    .bind(&entry.description)
    .bind(entry.updated_at)
    .bind(&entry.updated_by)
    .execute(pool)
    .await?;

    Ok(entry)
}

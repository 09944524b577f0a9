//! Server Configuration
//!
//! Environment-driven configuration: database location, uploads root and
//! listen port. The network base path is NOT loaded here; it lives in the
//! system configuration store (with an environment fallback) and is resolved
//! by the synchronizer per operation.

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default database location when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite://werkstatt.db";

/// Open the database and bring the schema up to date
///
/// Reads `DATABASE_URL` (e.g. `sqlite://werkstatt.db`), creating the file
/// when missing, then runs the bundled migrations.
pub async fn load_database() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("opening database {}", database_url);

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Root of the local upload area (`UPLOADS_DIR`, default `uploads`)
pub fn uploads_root() -> PathBuf {
    std::env::var("UPLOADS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

/// Listen port (`SERVER_PORT`, default 3000)
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

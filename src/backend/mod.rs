//! Backend Module
//!
//! Server-side code of the workshop order-management application: an Axum
//! HTTP server over an embedded SQLite store, with a filesystem-mirroring
//! side effect per order.
//!
//! # Architecture
//!
//! - **`server`** - Initialization, application state, configuration
//! - **`routes`** - Router assembly and the API route table
//! - **`orders`** - Order store, order numbering, status workflow, handlers
//! - **`documents`** - Uploaded-file and component metadata
//! - **`netfolder`** - Network folder synchronizer
//! - **`sysconfig`** - Runtime-overridable configuration store
//! - **`error`** - Handler error taxonomy and response mapping
//!
//! # State Management
//!
//! `AppState` carries the database pool and the uploads root; handlers
//! extract either the full state or just the pool via `FromRef`. There is no
//! other process-wide state; notably, the network base path is re-read from
//! the configuration store per synchronizer operation.
//!
//! # Failure Philosophy
//!
//! The synchronizer degrades instead of failing: configuration and
//! filesystem problems surface as structured `success: false` results while
//! the surrounding order operation completes. Handler errors proper map to
//! 404/400/500 JSON responses via `ApiError`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Orders: store, numbering, workflow, handlers
pub mod orders;

/// Document and component metadata
pub mod documents;

/// Network folder synchronizer
pub mod netfolder;

/// System configuration store
pub mod sysconfig;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::create_app;

//! Werkstatt - Workshop Order Management
//!
//! Backend for a workshop order-management application: clients submit
//! manufacturing (`fertigung`) and `service` orders, the workshop fulfills
//! them through a status workflow, and uploaded documents are mirrored into
//! a per-order folder tree on a configurable network path.
//!
//! # Module Structure
//!
//! - **`shared`** - Serde data model and request/response DTOs
//!   - Orders, sub tasks, documents, components, comment logs
//!   - Synchronizer outcome types, system configuration entries
//! - **`backend`** - Axum HTTP server
//!   - Order store and status workflow
//!   - Network folder synchronizer
//!   - System configuration store
//!   - Routing, state, error mapping
//!
//! # Storage
//!
//! Persistence is an embedded SQLite database accessed through sqlx; the
//! schema lives in `./migrations` and is applied on startup. Uploaded files
//! themselves stay in the local uploads area (served at `/uploads`); the
//! synchronizer copies them into the mirrored network folder on demand.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

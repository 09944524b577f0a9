//! Shared Types
//!
//! Data model and request/response DTOs shared between the HTTP surface and
//! the store/synchronizer layers. Everything here is plain serde data with no
//! I/O; the backend modules own all side effects.

/// Order domain model: orders, sub tasks, documents, components, workflow DTOs
pub mod orders;

/// Structured outcome types for the network folder synchronizer
pub mod netfolder;

/// System configuration entries and DTOs
pub mod sysconfig;

/// Shared error types
pub mod error;

pub use error::SharedError;

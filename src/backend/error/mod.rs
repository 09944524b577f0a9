//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Expected-but-unsuccessful domain outcomes (network path not configured,
//! unreachable base path, partial migrations) are NOT errors here: they are
//! structured `success: false` payloads returned with 200. `ApiError` covers
//! the cases that map to non-2xx status codes.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;

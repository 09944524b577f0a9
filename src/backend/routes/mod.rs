//! Route Configuration
//!
//! Router assembly for the API. `router.rs` builds the full router (API
//! routes, uploads static service, fallback); `api_routes.rs` holds the
//! `/api` route table.

/// Main router assembly
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;

//! Documents and Components Backend
//!
//! Metadata store and handlers for uploaded files and components. The upload
//! transport is external; these endpoints persist the `{name, url,
//! upload_date}` records it produces. The network folder synchronizer reads
//! from here when sweeping files into the mirrored tree.

/// Document/component metadata store
pub mod db;

/// HTTP handlers
pub mod handlers;

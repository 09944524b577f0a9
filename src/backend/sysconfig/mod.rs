//! System Configuration Backend
//!
//! Key/value configuration with runtime overrides. The synchronizer reads
//! `NETWORK_BASE_PATH` from here at the start of every operation, so a set
//! takes effect immediately without a restart and without any process-wide
//! mutable state.

/// Configuration store
pub mod db;

/// `NETWORK_BASE_PATH` normalization
pub mod normalize;

/// HTTP handlers
pub mod handlers;

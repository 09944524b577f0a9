//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs   - Module exports
//! ├── state.rs - AppState and FromRef implementations
//! ├── config.rs- Environment/config loading, database pool, migrations
//! └── init.rs  - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. Open (or create) the SQLite database and run migrations
//! 2. Resolve the uploads root
//! 3. Build `AppState` and the router

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;

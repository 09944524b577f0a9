//! Network Folder Synchronizer
//!
//! Maintains, per order, a mirrored directory tree on the configured network
//! base path and sweeps uploaded files into it. Everything here is
//! best-effort: operations return structured success/failure values instead
//! of raising, and a failed folder step never blocks the order operation
//! that triggered it.
//!
//! # Module Structure
//!
//! ```text
//! netfolder/
//! ├── mod.rs      - Module exports
//! ├── sync.rs     - Folder creation, file migration, path probing
//! ├── classify.rs - File-extension → subfolder routing
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Layout on disk
//!
//! ```text
//! {base}/{order number, sanitized}/
//! ├── CAD_CAM/  Zeichnungen/  Dokumentation/  Bilder/  Dokumente/  Archiv/
//! └── Bauteile/{component title, sanitized}/
//!     └── CAD_CAM/  Zeichnungen/  Dokumentation/  Bilder/  Dokumente/
//! ```
//!
//! The base path is re-read from the system configuration store (environment
//! fallback) at the start of every operation; there is no cached process-wide
//! path that could go stale after a runtime config change.

/// Folder creation and file migration
pub mod sync;

/// Extension classification
pub mod classify;

/// HTTP handlers
pub mod handlers;

//! Network Folder Synchronizer Outcomes
//!
//! Every synchronizer operation reports a structured success/failure value
//! instead of raising; the API boundary turns these into status codes. A
//! partial migration (some files failed to copy) still counts as success
//! with the failures listed per file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate result of one file migration sweep
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MigrationReport {
    /// Number of files copied in this sweep (already-present files not counted)
    pub migrated_files: u32,
    /// Destination subfolder → number of files copied into it
    pub file_types: BTreeMap<String, u32>,
    /// Per-file error strings; non-empty means a partial migration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl MigrationReport {
    /// Count one copied file under its destination subfolder
    pub fn record(&mut self, subfolder: &str) {
        self.migrated_files += 1;
        *self.file_types.entry(subfolder.to_string()).or_insert(0) += 1;
    }
}

/// Outcome of `ensure_order_folder`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderOutcome {
    pub success: bool,
    /// Resolved order folder path, on success
    pub path: Option<String>,
    /// Human-readable summary (also the failure reason)
    pub message: String,
    /// Migration sweep result, on success
    pub migration: Option<MigrationReport>,
}

impl FolderOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            path: None,
            message: message.into(),
            migration: None,
        }
    }

    pub fn created(path: String, message: impl Into<String>, migration: MigrationReport) -> Self {
        Self {
            success: true,
            path: Some(path),
            message: message.into(),
            migration: Some(migration),
        }
    }
}

/// Outcome of one explicit migration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationOutcome {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub report: MigrationReport,
}

/// Bookkeeping vs. on-disk reality for an order's folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderStatus {
    /// Store-side flag (`network_folder_created`)
    pub created: bool,
    /// Store-side path (`network_path`)
    pub path: Option<String>,
    /// Whether the folder currently exists on disk
    pub exists_on_disk: bool,
    /// Fixed subfolders missing on disk (repairable by re-running creation)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_subfolders: Vec<String>,
}

/// Result of probing a base path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathProbe {
    /// Path exists and is a directory
    pub reachable: bool,
    /// A throwaway probe directory could be created and removed
    pub writable: bool,
}

/// Request body for the path probe endpoint
///
/// Without an explicit path, the currently configured base path is probed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestPathRequest {
    pub path: Option<String>,
}

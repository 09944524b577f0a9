//! System Configuration Entries
//!
//! Key/value configuration with runtime override capability. The entry under
//! `NETWORK_BASE_PATH` governs the synchronizer's root path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known key for the synchronizer's base path
pub const NETWORK_BASE_PATH_KEY: &str = "NETWORK_BASE_PATH";

/// One stored configuration entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemConfigEntry {
    /// Unique key
    pub key: String,
    /// Stored value (normalized for `NETWORK_BASE_PATH`)
    pub value: String,
    /// What this entry is for
    pub description: String,
    /// When the entry was last written
    pub updated_at: DateTime<Utc>,
    /// Who last wrote it
    pub updated_by: String,
}

/// Request body for setting a configuration value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetConfigRequest {
    pub value: String,
    pub description: Option<String>,
    pub updated_by: Option<String>,
}

/// Response for reading a configuration value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetConfigResponse {
    pub key: String,
    /// `None` when the key has never been set
    pub value: Option<String>,
    pub configured: bool,
}

/// Response echoing the stored entry after a set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetConfigResponse {
    pub success: bool,
    pub entry: SystemConfigEntry,
}

//! Comment Log and Note History Entries
//!
//! One entry shape serves both workflow comment logs. The logs themselves are
//! separate order fields and are only ever appended to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in `revision_history` (workshop→client) or `rework_comments`
/// (client→workshop)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowComment {
    /// Comment text; guaranteed non-blank by the workflow layer
    pub comment: String,
    /// Id of the commenting user
    pub user_id: String,
    /// Display name of the commenting user
    pub user_name: String,
    /// When the comment was made
    pub created_at: DateTime<Utc>,
}

impl WorkflowComment {
    pub fn new(
        comment: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            comment: comment.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            created_at,
        }
    }
}

/// Archived previous value of the order's `notes` field, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteHistoryEntry {
    /// The note text that was replaced
    pub note: String,
    /// When it was replaced
    pub replaced_at: DateTime<Utc>,
}

//! Workshop-Internal Sub Tasks
//!
//! Sub tasks live embedded on the order (a JSON column in the store) and are
//! replaced as a whole list through order updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{SubTaskScope, SubTaskStatus};

/// A workshop-internal unit of work within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTask {
    /// Unique sub task id
    pub id: Uuid,
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Planned effort in hours
    pub estimated_hours: f64,
    /// Booked effort in hours
    pub actual_hours: f64,
    /// Sub task status
    pub status: SubTaskStatus,
    /// Assigned staff member, if any
    pub assigned_to: Option<String>,
    /// Whether the task applies to the order or to one component
    pub scope_type: SubTaskScope,
    /// Component the task is scoped to (when `scope_type` is `component`)
    pub assigned_component_id: Option<Uuid>,
    /// Files attached directly to the sub task
    #[serde(default)]
    pub documents: Vec<SubTaskDocument>,
}

/// File metadata attached to a sub task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubTaskDocument {
    pub id: Uuid,
    pub name: String,
    /// Relative upload path produced by the upload subsystem
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

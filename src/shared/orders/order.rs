//! The Order Aggregate
//!
//! An order as held in the store: scalar workflow fields plus the embedded
//! lists (sub tasks, the two comment logs, note history). Linked documents
//! and components live in their own tables and ride along in the detail
//! response, not on this struct.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comments::{NoteHistoryEntry, WorkflowComment};
use super::status::{OrderStatus, OrderType, Priority};
use super::subtask::SubTask;

/// A unit of work submitted by a client, tracked through the status workflow
///
/// Invariant: `network_folder_created == true` implies `network_path` holds
/// the path that existed when the synchronizer last verified it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order id
    pub id: Uuid,
    /// Human-facing number, `{F|S}-YYMM-N`, unique
    pub order_number: String,
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Submitting client's account id
    pub client_id: String,
    /// Submitting client's display name
    pub client_name: String,
    /// Requested completion date
    pub deadline: Option<DateTime<Utc>>,
    /// Cost center the order is billed to
    pub cost_center: Option<String>,
    /// Priority as chosen by the client
    pub priority: Priority,
    /// Current workflow status
    pub status: OrderStatus,
    /// Planned effort in hours
    pub estimated_hours: f64,
    /// Booked effort in hours
    pub actual_hours: f64,
    /// Assigned workshop staff member, if any
    pub assigned_to: Option<String>,
    /// Workshop notes; previous values are archived into `note_history`
    pub notes: String,
    /// Manufacturing or service order
    pub order_type: OrderType,
    /// Embedded workshop-internal sub tasks
    pub sub_tasks: Vec<SubTask>,
    /// Workshop→client comments, append-only, oldest first
    pub revision_history: Vec<WorkflowComment>,
    /// Client→workshop comments, append-only, oldest first
    pub rework_comments: Vec<WorkflowComment>,
    /// Archived previous `notes` values, newest first
    pub note_history: Vec<NoteHistoryEntry>,
    /// Client's note on final confirmation
    pub confirmation_note: Option<String>,
    /// When the client confirmed
    pub confirmation_date: Option<DateTime<Utc>>,
    /// Whether the client may currently edit the order (revision loop)
    pub can_edit: bool,
    /// Material ordered by the workshop
    pub material_ordered_by_workshop: bool,
    /// Material ordered by the client
    pub material_ordered_by_client: bool,
    /// Workshop confirmed the client's material order
    pub material_ordered_by_client_confirmed: bool,
    /// Material is on site
    pub material_available: bool,
    /// Inline-encoded title image, if any
    pub title_image: Option<String>,
    /// Mirrored network folder path, once created
    pub network_path: Option<String>,
    /// Whether the network folder was created and verified
    pub network_folder_created: bool,
    /// When the order was created
    pub created_at: DateTime<Utc>,
    /// When the order was last modified
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Name used for the mirrored network folder: the order number when
    /// present, the id otherwise (sanitization happens in the synchronizer)
    pub fn folder_source_name(&self) -> String {
        if self.order_number.is_empty() {
            self.id.to_string()
        } else {
            self.order_number.clone()
        }
    }
}

//! Order Endpoint DTOs
//!
//! Request and response bodies for the order endpoints, including the
//! field-level merge applied by the update endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::netfolder::FolderOutcome;

use super::comments::NoteHistoryEntry;
use super::component::ComponentWithDocuments;
use super::document::Document;
use super::order::Order;
use super::status::{OrderStatus, OrderType, Priority};
use super::subtask::SubTask;

/// Request body for creating an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_name: String,
    pub deadline: Option<DateTime<Utc>>,
    pub cost_center: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub estimated_hours: f64,
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub order_type: OrderType,
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
    pub title_image: Option<String>,
}

impl CreateOrderRequest {
    /// Validate the draft before it reaches the store
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title must not be empty"));
        }
        Ok(())
    }
}

/// Request body for the merge update endpoint
///
/// Absent fields leave the order untouched. The comment logs have no
/// counterpart here at all: they can only grow through workflow transitions,
/// never be replaced by an update. `status` is accepted solely for the
/// client's revision→pending resubmit; the handler rejects anything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub cost_center: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<OrderStatus>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub sub_tasks: Option<Vec<SubTask>>,
    pub material_ordered_by_workshop: Option<bool>,
    pub material_ordered_by_client: Option<bool>,
    pub material_ordered_by_client_confirmed: Option<bool>,
    pub material_available: Option<bool>,
    pub title_image: Option<String>,
}

impl UpdateOrderRequest {
    /// Merge the defined fields into `order`, stamping `updated_at`
    ///
    /// A changed `notes` value archives the previous text into
    /// `note_history` (newest first) before the new value is applied.
    /// The `status` field is intentionally not merged here; the handler
    /// routes it through the workflow.
    pub fn apply_to(&self, order: &mut Order, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            order.title = title.clone();
        }
        if let Some(description) = &self.description {
            order.description = description.clone();
        }
        if let Some(deadline) = self.deadline {
            order.deadline = Some(deadline);
        }
        if let Some(cost_center) = &self.cost_center {
            order.cost_center = Some(cost_center.clone());
        }
        if let Some(priority) = self.priority {
            order.priority = priority;
        }
        if let Some(estimated_hours) = self.estimated_hours {
            order.estimated_hours = estimated_hours;
        }
        if let Some(actual_hours) = self.actual_hours {
            order.actual_hours = actual_hours;
        }
        if let Some(assigned_to) = &self.assigned_to {
            order.assigned_to = Some(assigned_to.clone());
        }
        if let Some(notes) = &self.notes {
            if *notes != order.notes {
                order.note_history.insert(
                    0,
                    NoteHistoryEntry {
                        note: std::mem::take(&mut order.notes),
                        replaced_at: now,
                    },
                );
            }
            order.notes = notes.clone();
        }
        if let Some(sub_tasks) = &self.sub_tasks {
            order.sub_tasks = sub_tasks.clone();
        }
        if let Some(v) = self.material_ordered_by_workshop {
            order.material_ordered_by_workshop = v;
        }
        if let Some(v) = self.material_ordered_by_client {
            order.material_ordered_by_client = v;
        }
        if let Some(v) = self.material_ordered_by_client_confirmed {
            order.material_ordered_by_client_confirmed = v;
        }
        if let Some(v) = self.material_available {
            order.material_available = v;
        }
        if let Some(title_image) = &self.title_image {
            order.title_image = Some(title_image.clone());
        }
        order.updated_at = now;
    }
}

/// Request body for a workflow transition
///
/// `comment` is mandatory for transitions into `revision` and `rework`;
/// `confirmation_note` only applies to the client's final confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
    pub comment: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub confirmation_note: Option<String>,
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub client_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
}

/// Response for order creation
///
/// `network_folder` carries the best-effort synchronizer outcome; a failed
/// folder step never fails the creation itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
    pub network_folder: Option<FolderOutcome>,
}

/// Response for listing orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
}

/// Full order detail: the order plus its linked documents and components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order: Order,
    pub documents: Vec<Document>,
    pub components: Vec<ComponentWithDocuments>,
}

/// Response for merge updates and workflow transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

/// Response for delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_order() -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            order_number: "F-2507-1".to_string(),
            title: "Bracket".to_string(),
            description: String::new(),
            client_id: "c1".to_string(),
            client_name: "Client".to_string(),
            deadline: None,
            cost_center: None,
            priority: Priority::Medium,
            status: OrderStatus::Pending,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            assigned_to: None,
            notes: "first".to_string(),
            order_type: OrderType::Fertigung,
            sub_tasks: Vec::new(),
            revision_history: Vec::new(),
            rework_comments: Vec::new(),
            note_history: Vec::new(),
            confirmation_note: None,
            confirmation_date: None,
            can_edit: false,
            material_ordered_by_workshop: false,
            material_ordered_by_client: false,
            material_ordered_by_client_confirmed: false,
            material_available: false,
            title_image: None,
            network_path: None,
            network_folder_created: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_merge_leaves_absent_fields_untouched() {
        let mut order = sample_order();
        let req = UpdateOrderRequest {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        req.apply_to(&mut order, Utc::now());
        assert_eq!(order.title, "New title");
        assert_eq!(order.notes, "first");
        assert_eq!(order.client_name, "Client");
    }

    #[test]
    fn test_notes_change_archives_previous_value() {
        let mut order = sample_order();
        let req = UpdateOrderRequest {
            notes: Some("second".to_string()),
            ..Default::default()
        };
        req.apply_to(&mut order, Utc::now());
        assert_eq!(order.notes, "second");
        assert_eq!(order.note_history.len(), 1);
        assert_eq!(order.note_history[0].note, "first");

        // Unchanged notes do not grow the history
        let req = UpdateOrderRequest {
            notes: Some("second".to_string()),
            ..Default::default()
        };
        req.apply_to(&mut order, Utc::now());
        assert_eq!(order.note_history.len(), 1);
    }

    #[test]
    fn test_notes_history_is_newest_first() {
        let mut order = sample_order();
        for text in ["second", "third"] {
            let req = UpdateOrderRequest {
                notes: Some(text.to_string()),
                ..Default::default()
            };
            req.apply_to(&mut order, Utc::now());
        }
        assert_eq!(order.note_history[0].note, "second");
        assert_eq!(order.note_history[1].note, "first");
    }

    #[test]
    fn test_create_request_rejects_blank_title() {
        let req = CreateOrderRequest {
            title: "   ".to_string(),
            description: String::new(),
            client_id: String::new(),
            client_name: String::new(),
            deadline: None,
            cost_center: None,
            priority: Priority::Medium,
            estimated_hours: 0.0,
            assigned_to: None,
            notes: String::new(),
            order_type: OrderType::Service,
            sub_tasks: Vec::new(),
            title_image: None,
        };
        assert!(req.validate().is_err());
    }
}

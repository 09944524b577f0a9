//! Order Status Workflow
//!
//! The state machine governing the order lifecycle, written as an explicit
//! action × state transition table. The "complete" step is deliberately a
//! checkpoint: it moves work to `waiting_confirmation`, never straight to
//! `completed`; only the client's confirmation does that.
//!
//! Two side branches exist and stay separate:
//! - `revision` - workshop sends the order back to the client (any state,
//!   including pulling an archived order back); comments land in
//!   `revision_history` and the client regains edit rights.
//! - `rework` - client rejects finished work during final review; comments
//!   land in `rework_comments`.
//!
//! Comment-bearing steps are validated before any mutation: a blank comment
//! rejects the whole transition and leaves the order untouched.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::shared::orders::{Order, OrderStatus, WorkflowComment};

/// The acting user, as supplied by the request body
#[derive(Debug, Clone, Default)]
pub struct Actor {
    pub user_id: String,
    pub user_name: String,
}

impl Actor {
    pub fn from_parts(user_id: Option<String>, user_name: Option<String>) -> Self {
        Self {
            user_id: user_id.unwrap_or_default(),
            user_name: user_name.unwrap_or_default(),
        }
    }
}

/// A workflow step requested against an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Workshop accepts a pending order
    Accept,
    /// Workshop/admin sends the order back to the client (any state)
    RequestRevision { comment: String },
    /// Client resubmits an order that was in revision
    Resubmit,
    /// Workshop starts work on an accepted or reworked order
    Start,
    /// Workshop marks work done; the order waits for client confirmation
    Complete,
    /// Client confirms the finished work
    Confirm { note: Option<String> },
    /// Client rejects finished work during final review
    RequestRework { comment: String },
    /// Admin archives a completed order
    Archive,
}

impl OrderAction {
    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::RequestRevision { .. } => "revision",
            Self::Resubmit => "resubmit",
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Confirm { .. } => "confirm",
            Self::RequestRework { .. } => "rework",
            Self::Archive => "archive",
        }
    }

    /// Build the action that carries an order into `target`
    ///
    /// This is how the status endpoint's `{status, comment, ...}` body maps
    /// onto the table. Comment-bearing targets reject blank comments here,
    /// before anything is touched.
    pub fn for_target(
        target: OrderStatus,
        comment: Option<&str>,
        confirmation_note: Option<&str>,
    ) -> Result<Self, WorkflowError> {
        match target {
            OrderStatus::Pending => Ok(Self::Resubmit),
            OrderStatus::Accepted => Ok(Self::Accept),
            OrderStatus::Revision => Ok(Self::RequestRevision {
                comment: required_comment("revision", comment)?,
            }),
            OrderStatus::InProgress => Ok(Self::Start),
            OrderStatus::WaitingConfirmation => Ok(Self::Complete),
            OrderStatus::Completed => Ok(Self::Confirm {
                note: confirmation_note.map(|n| n.to_string()),
            }),
            OrderStatus::Rework => Ok(Self::RequestRework {
                comment: required_comment("rework", comment)?,
            }),
            OrderStatus::Archived => Ok(Self::Archive),
        }
    }
}

fn required_comment(action: &'static str, comment: Option<&str>) -> Result<String, WorkflowError> {
    match comment {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(WorkflowError::MissingComment { action }),
    }
}

/// A rejected workflow step
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// A comment-bearing step received no usable comment
    #[error("A comment is required for the '{action}' step")]
    MissingComment { action: &'static str },

    /// The action is not allowed from the order's current status
    #[error("The '{action}' step is not allowed while the order is '{from}'")]
    InvalidTransition {
        from: OrderStatus,
        action: &'static str,
    },
}

/// The transition table: current status × action → next status
pub fn transition(current: OrderStatus, action: &OrderAction) -> Result<OrderStatus, WorkflowError> {
    use OrderAction::*;
    use OrderStatus::*;

    match (current, action) {
        (Pending, Accept) => Ok(Accepted),
        // Reject/restore: available from every state, archived included
        (_, RequestRevision { .. }) => Ok(Revision),
        (Revision, Resubmit) => Ok(Pending),
        (Accepted, Start) | (Rework, Start) => Ok(InProgress),
        (InProgress, Complete) => Ok(WaitingConfirmation),
        (WaitingConfirmation, Confirm { .. }) => Ok(Completed),
        (WaitingConfirmation, RequestRework { .. }) => Ok(Rework),
        (Completed, Archive) => Ok(Archived),
        (from, action) => Err(WorkflowError::InvalidTransition {
            from,
            action: action.name(),
        }),
    }
}

/// Apply an action to an order: validate the transition, run its effects,
/// move the status and stamp `updated_at`
///
/// On error the order is left exactly as it was.
pub fn apply(
    order: &mut Order,
    action: &OrderAction,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    let next = transition(order.status, action)?;

    match action {
        OrderAction::RequestRevision { comment } => {
            order.revision_history.push(WorkflowComment::new(
                comment.clone(),
                actor.user_id.clone(),
                actor.user_name.clone(),
                now,
            ));
            order.can_edit = true;
        }
        OrderAction::Resubmit => {
            order.can_edit = false;
        }
        OrderAction::RequestRework { comment } => {
            order.rework_comments.push(WorkflowComment::new(
                comment.clone(),
                actor.user_id.clone(),
                actor.user_name.clone(),
                now,
            ));
        }
        OrderAction::Confirm { note } => {
            order.confirmation_note = note.clone();
            order.confirmation_date = Some(now);
        }
        // Restoring an archived order keeps any previous confirmation data
        OrderAction::Accept
        | OrderAction::Start
        | OrderAction::Complete
        | OrderAction::Archive => {}
    }

    order.status = next;
    order.updated_at = now;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::orders::{OrderType, Priority};
    use uuid::Uuid;

    fn order_in(status: OrderStatus) -> Order {
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
            status,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            assigned_to: None,
            notes: String::new(),
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

    fn actor() -> Actor {
        Actor {
            user_id: "u1".to_string(),
            user_name: "Mira".to_string(),
        }
    }

    #[test]
    fn test_happy_path() {
        use OrderStatus::*;
        let steps: [(OrderAction, OrderStatus); 5] = [
            (OrderAction::Accept, Accepted),
            (OrderAction::Start, InProgress),
            (OrderAction::Complete, WaitingConfirmation),
            (OrderAction::Confirm { note: None }, Completed),
            (OrderAction::Archive, Archived),
        ];
        let mut order = order_in(Pending);
        for (action, expected) in steps {
            apply(&mut order, &action, &actor(), Utc::now()).unwrap();
            assert_eq!(order.status, expected);
        }
    }

    #[test]
    fn test_complete_is_a_checkpoint_not_completed() {
        let mut order = order_in(OrderStatus::InProgress);
        apply(&mut order, &OrderAction::Complete, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::WaitingConfirmation);
        assert_eq!(order.confirmation_date, None);
    }

    #[test]
    fn test_revision_from_any_state_appends_comment_and_unlocks_editing() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::WaitingConfirmation,
            OrderStatus::Archived,
        ] {
            let mut order = order_in(status);
            let action = OrderAction::RequestRevision {
                comment: "please adjust the drawing".to_string(),
            };
            apply(&mut order, &action, &actor(), Utc::now()).unwrap();
            assert_eq!(order.status, OrderStatus::Revision);
            assert!(order.can_edit);
            assert_eq!(order.revision_history.len(), 1);
            assert_eq!(order.revision_history[0].user_name, "Mira");
        }
    }

    #[test]
    fn test_restore_from_archive_keeps_confirmation_fields() {
        let mut order = order_in(OrderStatus::Archived);
        order.confirmation_note = Some("all good".to_string());
        order.confirmation_date = Some(Utc::now());
        let action = OrderAction::RequestRevision {
            comment: "needs another pass".to_string(),
        };
        apply(&mut order, &action, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Revision);
        assert_eq!(order.confirmation_note.as_deref(), Some("all good"));
        assert!(order.confirmation_date.is_some());
    }

    #[test]
    fn test_rework_appends_to_its_own_log_only() {
        let mut order = order_in(OrderStatus::WaitingConfirmation);
        order.revision_history.push(WorkflowComment::new(
            "earlier revision",
            "u9",
            "Workshop",
            Utc::now(),
        ));
        let action = OrderAction::RequestRework {
            comment: "fix edges".to_string(),
        };
        apply(&mut order, &action, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Rework);
        assert_eq!(order.rework_comments.len(), 1);
        assert_eq!(order.rework_comments[0].comment, "fix edges");
        assert_eq!(order.revision_history.len(), 1);
    }

    #[test]
    fn test_rework_then_start() {
        let mut order = order_in(OrderStatus::Rework);
        apply(&mut order, &OrderAction::Start, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_resubmit_clears_can_edit() {
        let mut order = order_in(OrderStatus::Revision);
        order.can_edit = true;
        apply(&mut order, &OrderAction::Resubmit, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.can_edit);
    }

    #[test]
    fn test_confirm_stamps_note_and_date() {
        let mut order = order_in(OrderStatus::WaitingConfirmation);
        let action = OrderAction::Confirm {
            note: Some("thanks".to_string()),
        };
        apply(&mut order, &action, &actor(), Utc::now()).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.confirmation_note.as_deref(), Some("thanks"));
        assert!(order.confirmation_date.is_some());
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let cases = [
            (OrderStatus::Pending, OrderAction::Start),
            (OrderStatus::Pending, OrderAction::Complete),
            (OrderStatus::Accepted, OrderAction::Archive),
            (OrderStatus::InProgress, OrderAction::Confirm { note: None }),
            (OrderStatus::Completed, OrderAction::Accept),
            (
                OrderStatus::InProgress,
                OrderAction::RequestRework {
                    comment: "too early".to_string(),
                },
            ),
        ];
        for (status, action) in cases {
            let mut order = order_in(status);
            let err = apply(&mut order, &action, &actor(), Utc::now()).unwrap_err();
            assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
            assert_eq!(order.status, status);
        }
    }

    #[test]
    fn test_blank_comment_is_rejected_before_mutation() {
        for comment in [None, Some(""), Some("   ")] {
            let err = OrderAction::for_target(OrderStatus::Revision, comment, None).unwrap_err();
            assert_eq!(err, WorkflowError::MissingComment { action: "revision" });

            let err = OrderAction::for_target(OrderStatus::Rework, comment, None).unwrap_err();
            assert_eq!(err, WorkflowError::MissingComment { action: "rework" });
        }
    }

    #[test]
    fn test_for_target_builds_the_expected_actions() {
        assert_eq!(
            OrderAction::for_target(OrderStatus::Accepted, None, None).unwrap(),
            OrderAction::Accept
        );
        assert_eq!(
            OrderAction::for_target(OrderStatus::Pending, None, None).unwrap(),
            OrderAction::Resubmit
        );
        assert_eq!(
            OrderAction::for_target(OrderStatus::Completed, None, Some("done")).unwrap(),
            OrderAction::Confirm {
                note: Some("done".to_string())
            }
        );
    }
}

//! Order Domain Model
//!
//! Types for the order lifecycle: the order itself, its embedded sub tasks
//! and comment logs, linked documents and components, and the DTOs used by
//! the HTTP handlers.
//!
//! The two comment logs are deliberately separate fields with separate
//! append paths: `revision_history` carries workshop→client comments,
//! `rework_comments` carries client→workshop comments. They share one entry
//! shape but are never merged.

/// Lifecycle enums: order status, priority, order type, sub task scope
pub mod status;

/// The order aggregate
pub mod order;

/// Comment log and note history entries
pub mod comments;

/// Workshop-internal sub tasks
pub mod subtask;

/// Order-level uploaded document metadata
pub mod document;

/// Components (sub-assemblies) and their documents
pub mod component;

/// Request/response DTOs for the order endpoints
pub mod requests;

pub use comments::{NoteHistoryEntry, WorkflowComment};
pub use component::{Component, ComponentDocument, ComponentWithDocuments};
pub use document::Document;
pub use order::Order;
pub use requests::{
    CreateOrderRequest, ListOrdersQuery, OrderDetailResponse, OrderResponse,
    StatusChangeRequest, UpdateOrderRequest,
};
pub use status::{OrderStatus, OrderType, Priority, SubTaskScope, SubTaskStatus};
pub use subtask::{SubTask, SubTaskDocument};

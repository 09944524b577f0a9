//! Components
//!
//! A component is a named sub-assembly within an order. Components carry
//! their own document list; in the network folder those files are mirrored
//! under `Bauteile/{component title}/...`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named sub-assembly within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    /// Unique component id
    pub id: Uuid,
    /// Owning order
    pub order_id: Uuid,
    /// Component title; also the mirrored folder name (sanitized)
    pub title: String,
    /// Free-form description
    pub description: String,
    /// When the component was created
    pub created_at: DateTime<Utc>,
}

/// Uploaded file attached to a component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentDocument {
    /// Unique document id
    pub id: Uuid,
    /// Owning component
    pub component_id: Uuid,
    /// Original file name
    pub name: String,
    /// Relative upload path (e.g. `/uploads/abc.step`)
    pub url: String,
    /// When the file was uploaded
    pub upload_date: DateTime<Utc>,
}

/// A component together with its documents, as returned in order detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentWithDocuments {
    #[serde(flatten)]
    pub component: Component,
    pub documents: Vec<ComponentDocument>,
}

/// Request body for creating a component on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComponentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Response for component creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComponentResponse {
    pub success: bool,
    pub component: Component,
}

/// Response for registering a file on a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterComponentDocumentResponse {
    pub success: bool,
    pub document: ComponentDocument,
}

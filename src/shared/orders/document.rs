//! Order-Level Document Metadata
//!
//! The upload transport is external to this service; it hands us a
//! `{name, url, upload_date}` record per stored file. The synchronizer only
//! ever consumes the `url`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploaded file attached directly to an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Unique document id
    pub id: Uuid,
    /// Owning order
    pub order_id: Uuid,
    /// Original file name
    pub name: String,
    /// Relative upload path (e.g. `/uploads/abc.pdf`)
    pub url: String,
    /// When the file was uploaded
    pub upload_date: DateTime<Utc>,
}

/// Request body for registering an uploaded file on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDocumentRequest {
    pub name: String,
    pub url: String,
}

/// Response for document registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDocumentResponse {
    pub success: bool,
    pub document: Document,
}

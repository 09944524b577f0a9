//! Lifecycle Enums
//!
//! Status, priority and type enums for orders and sub tasks. All of them
//! serialize as lowercase snake_case strings, which is also the on-disk
//! representation in the store.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// The full transition table lives in `backend::orders::workflow`; this type
/// only carries the states and their string form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Submitted by a client, waiting for the workshop to accept
    Pending,
    /// Accepted by the workshop, not yet started
    Accepted,
    /// Workshop is working on the order
    InProgress,
    /// Workshop sent the order back to the client for amendments
    Revision,
    /// Client sent completed work back to the workshop
    Rework,
    /// Workshop finished; waiting for the client to confirm
    WaitingConfirmation,
    /// Client confirmed the finished work
    Completed,
    /// Closed by an admin
    Archived,
}

impl OrderStatus {
    /// String form as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Revision => "revision",
            Self::Rework => "rework",
            Self::WaitingConfirmation => "waiting_confirmation",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Parse from the stored string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "in_progress" => Some(Self::InProgress),
            "revision" => Some(Self::Revision),
            "rework" => Some(Self::Rework),
            "waiting_confirmation" => Some(Self::WaitingConfirmation),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order priority
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Order type: manufacturing or service
///
/// The type decides the order-number prefix (`F-...` / `S-...`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Fertigung,
    Service,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fertigung => "fertigung",
            Self::Service => "service",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fertigung" => Some(Self::Fertigung),
            "service" => Some(Self::Service),
            _ => None,
        }
    }

    /// Order-number prefix for this type
    pub fn number_prefix(&self) -> char {
        match self {
            Self::Fertigung => 'F',
            Self::Service => 'S',
        }
    }
}

/// Sub task status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubTaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Whether a sub task is scoped to the whole order or to one component
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubTaskScope {
    Order,
    Component,
}

//! Response DTOs for the contact API
//!
//! Every contact endpoint answers with an envelope carrying a `success` flag
//! and either `data` or a `message`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::contacts::Contact;

/// Response body for listing contacts (GET /api/contacts)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactListResponse {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
    /// All contacts in creation order
    pub data: Vec<Contact>,
}

impl ContactListResponse {
    /// Creates a new ContactListResponse
    pub fn new(data: Vec<Contact>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response body for fetching one contact (GET /api/contacts/:id)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactResponse {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
    /// The requested contact
    pub data: Contact,
}

impl ContactResponse {
    /// Creates a new ContactResponse
    pub fn new(data: Contact) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Message envelope used by create, update, delete and by every failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Whether the operation succeeded
    #[schema(example = true)]
    pub success: bool,
    /// Human readable outcome
    #[schema(example = "Contact 1 added")]
    pub message: String,
}

impl MessageResponse {
    /// Successful envelope with the given message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failure envelope with the given message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// "Contact {id} added"
    pub fn added(id: u64) -> Self {
        Self::success(format!("Contact {} added", id))
    }

    /// "Contact {id} updated"
    pub fn updated(id: u64) -> Self {
        Self::success(format!("Contact {} updated", id))
    }

    /// "Contact {id} removed"
    pub fn removed(id: u64) -> Self {
        Self::success(format!("Contact {} removed", id))
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    #[schema(example = "healthy")]
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Number of contacts currently stored
    pub total_contacts: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(total_contacts: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            total_contacts,
        }
    }
}

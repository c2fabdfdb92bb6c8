//! Request DTOs for the contact API
//!
//! Defines the structure of incoming HTTP request bodies and path parameters.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ContactError, Result};

/// Request body for creating (POST /api/contacts) or updating
/// (PUT /api/contacts/:id) a contact.
///
/// Both fields must be present strings; their content is stored as given.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactInput {
    /// Display name
    #[schema(example = "Wahyu")]
    pub name: String,
    /// Email address
    #[schema(example = "wahyu@example.com")]
    pub email: String,
}

/// Parses the `:id` path segment into a contact id.
///
/// Anything that is not a plain unsigned integer is an invalid request.
pub fn parse_contact_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|err| ContactError::InvalidRequest(format!("id '{}': {}", raw, err)))
}

//! Contact Record Module
//!
//! Defines the single domain entity managed by the store.

use serde::Serialize;
use utoipa::ToSchema;

// == Contact ==
/// A contact as stored and returned by the API.
///
/// The `id` is assigned by [`ContactStore`](crate::contacts::ContactStore)
/// on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Contact {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: u64,
    /// Display name
    #[schema(example = "Wahyu")]
    pub name: String,
    /// Email address, stored as given
    #[schema(example = "wahyu@example.com")]
    pub email: String,
}

impl Contact {
    /// Creates a new Contact with the given id.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

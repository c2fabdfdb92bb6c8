//! Error types for the contact API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::models::MessageResponse;

// == Public Messages ==
/// Envelope message for an id with no matching contact
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Envelope message for an unparseable path id or request body
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

// == Contact Error Enum ==
/// Unified error type for the contact API.
#[derive(Error, Debug)]
pub enum ContactError {
    /// No contact with this id
    #[error("Contact {0} not found")]
    NotFound(u64),

    /// Path id or body could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ContactError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::NotFound(_) => StatusCode::NOT_FOUND,
            ContactError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message placed in the failure envelope.
    ///
    /// Kept fixed so clients can match on it; the detailed text only goes to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::NotFound(_) => NOT_FOUND_MESSAGE,
            ContactError::InvalidRequest(_) => INVALID_REQUEST_MESSAGE,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        debug!("Request failed: {}", self);

        let body = Json(MessageResponse::failure(self.public_message()));
        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the contact API.
pub type Result<T> = std::result::Result<T, ContactError>;

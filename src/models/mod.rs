//! Request and Response models for the contact API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_contact_id, ContactInput};
pub use responses::{ContactListResponse, ContactResponse, HealthResponse, MessageResponse};

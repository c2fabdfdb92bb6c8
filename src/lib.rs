//! Contact API - A minimal in-memory contact list server
//!
//! Exposes list/get/create/update/delete over JSON with an OpenAPI description.

pub mod api;
pub mod config;
pub mod contacts;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
pub use contacts::{Contact, ContactStore};

//! API Module
//!
//! HTTP handlers and routing for the contact REST API.
//!
//! # Endpoints
//! - `GET /api/contacts` - List all contacts
//! - `GET /api/contacts/:id` - Get a contact by id
//! - `POST /api/contacts` - Add a contact
//! - `PUT /api/contacts/:id` - Update a contact
//! - `DELETE /api/contacts/:id` - Remove a contact
//! - `GET /api-docs/openapi.json` - OpenAPI document
//! - `GET /docs/` - Swagger UI
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use openapi::ApiDoc;
pub use routes::create_router;

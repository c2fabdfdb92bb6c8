//! API Routes
//!
//! Configures the Axum router with all contact API endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_contact_handler, delete_contact_handler, get_contact_handler, health_handler,
    list_contacts_handler, update_contact_handler, AppState,
};
use super::openapi::swagger_ui;

/// Contact routes, mounted under `/api`.
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/:id",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
}

/// Creates the main router with all endpoints configured.
///
/// Swagger UI is served at `/docs/` and the OpenAPI document at
/// `/api-docs/openapi.json`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", contact_routes())
        .merge(swagger_ui())
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

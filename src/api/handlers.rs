//! API Handlers
//!
//! HTTP request handlers for each contact endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use crate::contacts::ContactStore;
use crate::error::{ContactError, Result};
use crate::models::{
    parse_contact_id, ContactInput, ContactListResponse, ContactResponse, HealthResponse,
    MessageResponse,
};

/// Application state shared across all handlers.
///
/// Contains the contact store wrapped in Arc<RwLock<>> for thread-safe access.
/// Create, update and delete hold the write lock for their whole
/// find-and-modify step.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe contact store
    pub contacts: Arc<RwLock<ContactStore>>,
}

impl AppState {
    /// Creates a new AppState with the given contact store.
    pub fn new(contacts: ContactStore) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ContactStore::new())
    }
}

/// Unwraps a JSON body, turning extractor rejections into an invalid request.
fn read_body(payload: std::result::Result<Json<ContactInput>, JsonRejection>) -> Result<ContactInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| ContactError::InvalidRequest(rejection.body_text()))
}

/// Resolves the `:id` segment, including segments axum could not decode.
fn read_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<u64> {
    let Path(raw) = path.map_err(|rejection| ContactError::InvalidRequest(rejection.body_text()))?;
    parse_contact_id(&raw)
}

/// Handler for GET /api/contacts
///
/// Returns every contact in creation order.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    summary = "Get contacts",
    description = "Get all contacts from the store",
    responses(
        (status = 200, description = "Success", body = ContactListResponse),
    )
)]
pub async fn list_contacts_handler(State(state): State<AppState>) -> Json<ContactListResponse> {
    let contacts = state.contacts.read().await;
    Json(ContactListResponse::new(contacts.list_all()))
}

/// Handler for GET /api/contacts/:id
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    summary = "Get contact by ID",
    description = "Get a single contact from the store by ID",
    params(
        ("id" = u64, Path, description = "Contact ID"),
    ),
    responses(
        (status = 200, description = "Success", body = ContactResponse),
        (status = 400, description = "Bad Request", body = MessageResponse,
            example = json!({"success": false, "message": "Invalid request"})),
        (status = 404, description = "Not Found", body = MessageResponse,
            example = json!({"success": false, "message": "Not found"})),
    )
)]
pub async fn get_contact_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ContactResponse>> {
    let id = read_id(path)?;

    let contacts = state.contacts.read().await;
    let contact = contacts.get_by_id(id).ok_or(ContactError::NotFound(id))?;

    Ok(Json(ContactResponse::new(contact)))
}

/// Handler for POST /api/contacts
///
/// Stores a new contact. The id is always assigned by the store.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    summary = "Add contact",
    description = "Add a contact to the store",
    request_body = ContactInput,
    responses(
        (status = 200, description = "Success", body = MessageResponse,
            example = json!({"success": true, "message": "Contact 1 added"})),
        (status = 400, description = "Bad Request", body = MessageResponse,
            example = json!({"success": false, "message": "Invalid request"})),
    )
)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let input = read_body(payload)?;

    let mut contacts = state.contacts.write().await;
    let contact = contacts.create(input.name, input.email);
    info!("Contact {} added", contact.id);

    Ok(Json(MessageResponse::added(contact.id)))
}

/// Handler for PUT /api/contacts/:id
///
/// Replaces name and email of an existing contact, keeping its id.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    summary = "Update contact",
    description = "Update a contact in the store",
    params(
        ("id" = u64, Path, description = "Contact ID"),
    ),
    request_body = ContactInput,
    responses(
        (status = 200, description = "Success", body = MessageResponse,
            example = json!({"success": true, "message": "Contact 1 updated"})),
        (status = 400, description = "Bad Request", body = MessageResponse,
            example = json!({"success": false, "message": "Invalid request"})),
        (status = 404, description = "Not Found", body = MessageResponse,
            example = json!({"success": false, "message": "Not found"})),
    )
)]
pub async fn update_contact_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    payload: std::result::Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let id = read_id(path)?;
    let input = read_body(payload)?;

    let mut contacts = state.contacts.write().await;
    contacts
        .update(id, input.name, input.email)
        .ok_or(ContactError::NotFound(id))?;
    info!("Contact {} updated", id);

    Ok(Json(MessageResponse::updated(id)))
}

/// Handler for DELETE /api/contacts/:id
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    summary = "Remove contact",
    description = "Remove a contact from the store",
    params(
        ("id" = u64, Path, description = "Contact ID"),
    ),
    responses(
        (status = 200, description = "Success", body = MessageResponse,
            example = json!({"success": true, "message": "Contact 1 removed"})),
        (status = 400, description = "Bad Request", body = MessageResponse,
            example = json!({"success": false, "message": "Invalid request"})),
        (status = 404, description = "Not Found", body = MessageResponse,
            example = json!({"success": false, "message": "Not found"})),
    )
)]
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let id = read_id(path)?;

    let mut contacts = state.contacts.write().await;
    contacts.delete(id).ok_or(ContactError::NotFound(id))?;
    info!("Contact {} removed", id);

    Ok(Json(MessageResponse::removed(id)))
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let contacts = state.contacts.read().await;
    Json(HealthResponse::healthy(contacts.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> std::result::Result<Path<String>, PathRejection> {
        Ok(Path(raw.to_string()))
    }

    fn input(name: &str, email: &str) -> std::result::Result<Json<ContactInput>, JsonRejection> {
        Ok(Json(ContactInput {
            name: name.to_string(),
            email: email.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = AppState::default();

        let result = create_contact_handler(
            State(state.clone()),
            input("Wahyu", "wahyu@example.com"),
        )
        .await;
        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Contact 1 added");

        let result = get_contact_handler(State(state), id("1")).await;
        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.data.name, "Wahyu");
        assert_eq!(response.data.email, "wahyu@example.com");
    }

    #[tokio::test]
    async fn test_get_nonexistent_contact() {
        let state = AppState::default();

        let result = get_contact_handler(State(state), id("999")).await;
        assert!(matches!(result, Err(ContactError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_invalid_id_rejected() {
        let state = AppState::default();

        let get = get_contact_handler(State(state.clone()), id("abc")).await;
        assert!(matches!(get, Err(ContactError::InvalidRequest(_))));

        let update = update_contact_handler(
            State(state.clone()),
            id("abc"),
            input("X", "x@example.com"),
        )
        .await;
        assert!(matches!(update, Err(ContactError::InvalidRequest(_))));

        let delete = delete_contact_handler(State(state), id("abc")).await;
        assert!(matches!(delete, Err(ContactError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::default();
        create_contact_handler(State(state.clone()), input("Wahyu", "wahyu@example.com"))
            .await
            .unwrap();

        let response = update_contact_handler(
            State(state.clone()),
            id("1"),
            input("Wahyu Ivan", "wahyu@example.com"),
        )
        .await
        .unwrap();
        assert_eq!(response.message, "Contact 1 updated");

        let fetched = get_contact_handler(State(state), id("1"))
            .await
            .unwrap();
        assert_eq!(fetched.data.name, "Wahyu Ivan");
    }

    #[tokio::test]
    async fn test_update_on_empty_store() {
        let state = AppState::default();

        let result = update_contact_handler(
            State(state.clone()),
            id("1"),
            input("X", "x@example.com"),
        )
        .await;
        assert!(matches!(result, Err(ContactError::NotFound(1))));
        assert!(state.contacts.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::default();
        create_contact_handler(State(state.clone()), input("Ana", "ana@example.com"))
            .await
            .unwrap();

        let response = delete_contact_handler(State(state.clone()), id("1"))
            .await
            .unwrap();
        assert_eq!(response.message, "Contact 1 removed");

        let result = get_contact_handler(State(state.clone()), id("1")).await;
        assert!(result.is_err());

        let again = delete_contact_handler(State(state), id("1")).await;
        assert!(matches!(again, Err(ContactError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::default();
        create_contact_handler(State(state.clone()), input("Ana", "ana@example.com"))
            .await
            .unwrap();
        create_contact_handler(State(state.clone()), input("Budi", "budi@example.com"))
            .await
            .unwrap();

        let response = list_contacts_handler(State(state)).await;
        assert!(response.success);
        let ids: Vec<u64> = response.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::default();
        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.total_contacts, 0);
    }
}

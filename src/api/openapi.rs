//! OpenAPI Document
//!
//! Builds the machine-readable API description from the route annotations
//! and mounts it together with Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// `OpenAPI` documentation for the contact API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact API",
        version = env!("CARGO_PKG_VERSION"),
        description = "In-memory contact list REST API."
    ),
    paths(
        crate::api::handlers::list_contacts_handler,
        crate::api::handlers::get_contact_handler,
        crate::api::handlers::create_contact_handler,
        crate::api::handlers::update_contact_handler,
        crate::api::handlers::delete_contact_handler,
        crate::api::handlers::health_handler,
    ),
    components(
        schemas(
            crate::contacts::Contact,
            crate::models::ContactInput,
            crate::models::ContactListResponse,
            crate::models::ContactResponse,
            crate::models::MessageResponse,
            crate::models::HealthResponse,
        )
    ),
    tags(
        (name = "Contacts", description = "Contact list operations"),
        (name = "Health", description = "Liveness check"),
    ),
)]
pub struct ApiDoc;

// == Documentation Paths ==
/// Where the interactive Swagger UI is mounted
pub const DOCS_PATH: &str = "/docs";

/// Where the raw OpenAPI document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI serving [`ApiDoc`] as JSON alongside the interactive page.
///
/// UI assets are compiled in through the `vendored` feature.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn test_info_block() {
        let doc = document();
        assert_eq!(doc["info"]["title"], "Contact API");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_all_contact_routes_documented() {
        let doc = document();
        let paths = &doc["paths"];

        for method in ["get", "post"] {
            assert!(
                paths["/api/contacts"].get(method).is_some(),
                "missing {} /api/contacts",
                method
            );
        }
        for method in ["get", "put", "delete"] {
            assert!(
                paths["/api/contacts/{id}"].get(method).is_some(),
                "missing {} /api/contacts/{{id}}",
                method
            );
        }
    }

    #[test]
    fn test_contact_schema_registered() {
        let doc = document();
        let contact = &doc["components"]["schemas"]["Contact"];
        let required: Vec<&str> = contact["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"id"));
        assert!(required.contains(&"name"));
        assert!(required.contains(&"email"));
    }

    #[test]
    fn test_create_request_body_references_input() {
        let doc = document();
        let schema_ref = &doc["paths"]["/api/contacts"]["post"]["requestBody"]["content"]
            ["application/json"]["schema"]["$ref"];
        assert_eq!(schema_ref, "#/components/schemas/ContactInput");
    }

    #[test]
    fn test_only_api_routes_documented() {
        let doc = document();
        let mut paths: Vec<&str> = doc["paths"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["/api/contacts", "/api/contacts/{id}", "/health"]);
    }
}

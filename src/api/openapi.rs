//! OpenAPI document and its HTTP exposure.
//!
//! With the `swagger-ui` feature the document is served by Swagger UI at
//! `/docs` alongside `/openapi.json`; without it only the raw JSON route is
//! mounted.

use axum::Router;
use utoipa::OpenApi;

use super::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use super::handlers::{system, todo};
use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Aggregated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Boilerplate Rust",
        description = "Starter template for a small REST API, demonstrated with an in-memory To-Do resource."
    ),
    paths(
        todo::list_todos,
        todo::create_todo,
        todo::get_todo,
        todo::update_todo,
        todo::delete_todo,
        system::health_handler,
        system::root_handler,
    ),
    components(schemas(
        CreateTodoRequest,
        UpdateTodoRequest,
        TodoResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "todos", description = "To-do item operations"),
        (name = "health", description = "Liveness"),
        (name = "root", description = "Service index"),
    )
)]
pub struct ApiDoc;

/// Documentation routes.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    use utoipa_swagger_ui::SwaggerUi;

    let swagger = SwaggerUi::new("/docs").url(OPENAPI_PATH, ApiDoc::openapi());
    Router::new().merge(swagger)
}

/// Documentation routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}

//! System endpoints: health check and service index.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
    environment: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    description = "Returns a fixed ok status with the running version and environment.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            message: "API is up and running",
            version: env!("CARGO_PKG_VERSION"),
            environment: state.config.environment.clone(),
        }),
    )
}

/// Links to the API documentation.
#[derive(Debug, Serialize, ToSchema)]
struct DocumentationLinks {
    swagger: &'static str,
    openapi_schema: &'static str,
}

/// Service index response.
#[derive(Debug, Serialize, ToSchema)]
struct RootResponse {
    message: String,
    documentation: DocumentationLinks,
    version: &'static str,
    environment: String,
}

/// `GET /` — Service index with documentation links.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    summary = "Service index",
    description = "Greets the caller and points at the interactive documentation.",
    responses(
        (status = 200, description = "Welcome message", body = RootResponse),
    )
)]
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        message: format!("Welcome to {}!", state.config.app_name),
        documentation: DocumentationLinks {
            swagger: "/docs",
            openapi_schema: "/openapi.json",
        },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

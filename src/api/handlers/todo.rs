//! To-do CRUD handlers: list, create, get, update, delete.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use crate::app_state::AppState;
use crate::domain::TodoId;
use crate::error::{ApiError, ErrorResponse};

/// `GET /todos` — List every to-do.
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    tag = "todos",
    summary = "List to-dos",
    description = "Returns all stored to-dos in ascending id order.",
    responses(
        (status = 200, description = "All to-dos", body = Vec<TodoResponse>),
    )
)]
pub async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    let todos: Vec<TodoResponse> = state
        .todo_service
        .list_todos()
        .await
        .into_iter()
        .map(TodoResponse::from)
        .collect();
    Json(todos)
}

/// `POST /todos` — Create a to-do.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed body or blank title.
#[utoipa::path(
    post,
    path = "/api/v1/todos",
    tag = "todos",
    summary = "Create a to-do",
    description = "Creates a to-do. `description` defaults to null and `completed` to false.",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "To-do created", body = TodoResponse),
        (status = 422, description = "Invalid body or blank title", body = ErrorResponse),
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let record = state.todo_service.create_todo(req.into()).await?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(record))))
}

/// `GET /todos/{id}` — Get a single to-do.
///
/// # Errors
///
/// Returns [`ApiError::TodoNotFound`] if the to-do does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    summary = "Get a to-do",
    params(
        ("id" = i64, Path, description = "To-do id"),
    ),
    responses(
        (status = 200, description = "To-do details", body = TodoResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "To-do not found", body = ErrorResponse),
    )
)]
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let record = state.todo_service.get_todo(id).await?;
    Ok(Json(TodoResponse::from(record)))
}

/// `PUT /todos/{id}` — Partially update a to-do.
///
/// # Errors
///
/// Returns [`ApiError::TodoNotFound`] if the to-do does not exist, or
/// [`ApiError::InvalidRequest`] on a malformed body or blank title.
#[utoipa::path(
    put,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    summary = "Update a to-do",
    description = "Overwrites only the fields present and non-null in the body. `updated_at` is always refreshed.",
    params(
        ("id" = i64, Path, description = "To-do id"),
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated to-do", body = TodoResponse),
        (status = 404, description = "To-do not found", body = ErrorResponse),
        (status = 422, description = "Invalid body or blank title", body = ErrorResponse),
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let record = state.todo_service.update_todo(id, req.into()).await?;
    Ok(Json(TodoResponse::from(record)))
}

/// `DELETE /todos/{id}` — Remove a to-do.
///
/// # Errors
///
/// Returns [`ApiError::TodoNotFound`] if the to-do does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    summary = "Delete a to-do",
    params(
        ("id" = i64, Path, description = "To-do id"),
    ),
    responses(
        (status = 204, description = "To-do deleted"),
        (status = 404, description = "To-do not found", body = ErrorResponse),
    )
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    state.todo_service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// To-do resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

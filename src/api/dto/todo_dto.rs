//! To-do DTOs for create, update, and read operations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewTodo, TodoId, TodoPatch, TodoRecord};

/// Request body for `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Task title (required, must not be blank).
    #[schema(example = "Buy milk")]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial completion flag. Defaults to `false`.
    #[serde(default)]
    pub completed: bool,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// Request body for `PUT /todos/{id}`.
///
/// Every field is optional. An omitted field and an explicit `null` both
/// leave the stored value unchanged; send `""` to clear the description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New completion flag.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// A to-do as returned by every read or write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    /// Store-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: TodoId,
    /// Task title.
    pub title: String,
    /// Description, or `null` if none was given.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// RFC 3339 creation timestamp with UTC offset.
    pub created_at: DateTime<FixedOffset>,
    /// RFC 3339 last-update timestamp with UTC offset.
    pub updated_at: DateTime<FixedOffset>,
}

impl From<TodoRecord> for TodoResponse {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            completed: record.completed,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

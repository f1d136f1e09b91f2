//! To-do record and the field sets used to create and patch it.

use chrono::{DateTime, FixedOffset};

use super::TodoId;

/// A stored to-do item.
///
/// Only [`super::TodoStore`] constructs or mutates records. `id` and
/// `created_at` never change after creation; `updated_at` is re-stamped on
/// every successful update and is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Store-assigned identifier.
    pub id: TodoId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Whether the task is done.
    pub completed: bool,
    /// Creation instant in the configured timezone.
    pub created_at: DateTime<FixedOffset>,
    /// Last modification instant in the configured timezone.
    pub updated_at: DateTime<FixedOffset>,
}

/// Caller-supplied fields for a new record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTodo {
    /// Task title.
    pub title: String,
    /// Optional description. `None` stores no description.
    pub description: Option<String>,
    /// Initial completion flag.
    pub completed: bool,
}

impl NewTodo {
    /// Creates a pending to-do with the given title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial update for an existing record.
///
/// Each field is independently present or absent. Absent fields leave the
/// stored value untouched; present fields overwrite it. Clearing a
/// description is expressed as `Some(String::new())`, not `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Returns `true` if the patch carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Writes the present fields into `record`.
    pub(crate) fn apply_to(self, record: &mut TodoRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(completed) = self.completed {
            record.completed = completed;
        }
    }
}

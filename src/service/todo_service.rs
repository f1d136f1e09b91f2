//! To-do service: validates input, drives the store, and logs mutations.

use std::sync::Arc;

use crate::domain::{NewTodo, TodoId, TodoPatch, TodoRecord, TodoStore};
use crate::error::ApiError;

/// Orchestration layer for all to-do operations.
///
/// Holds a shared reference to the [`TodoStore`]. Input validation lives
/// here rather than in the store, and absence reported by the store is
/// turned into [`ApiError::TodoNotFound`].
#[derive(Debug, Clone)]
pub struct TodoService {
    store: Arc<TodoStore>,
}

impl TodoService {
    /// Creates a new `TodoService` over the given store.
    #[must_use]
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`TodoStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<TodoStore> {
        &self.store
    }

    /// Returns all to-dos in ascending id order.
    pub async fn list_todos(&self) -> Vec<TodoRecord> {
        self.store.list_all().await
    }

    /// Returns a single to-do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TodoNotFound`] if no to-do has this id.
    pub async fn get_todo(&self, id: TodoId) -> Result<TodoRecord, ApiError> {
        self.store.get(id).await.ok_or_else(|| {
            tracing::debug!(%id, "todo lookup missed");
            ApiError::TodoNotFound(id)
        })
    }

    /// Creates a to-do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the title is blank.
    pub async fn create_todo(&self, new: NewTodo) -> Result<TodoRecord, ApiError> {
        validate_title(&new.title)?;
        let record = self.store.create(new).await;
        tracing::info!(id = %record.id, title = %record.title, "todo created");
        Ok(record)
    }

    /// Applies a partial update to a to-do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if a blank title is supplied,
    /// or [`ApiError::TodoNotFound`] if no to-do has this id.
    pub async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Result<TodoRecord, ApiError> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        let empty = patch.is_empty();
        match self.store.update(id, patch).await {
            Some(record) => {
                tracing::info!(%id, touch_only = empty, "todo updated");
                Ok(record)
            }
            None => {
                tracing::debug!(%id, "update target missing");
                Err(ApiError::TodoNotFound(id))
            }
        }
    }

    /// Deletes a to-do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TodoNotFound`] if no to-do has this id.
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        if self.store.delete(id).await {
            tracing::info!(%id, "todo deleted");
            Ok(())
        } else {
            tracing::debug!(%id, "delete target missing");
            Err(ApiError::TodoNotFound(id))
        }
    }
}

/// Rejects titles that are empty or whitespace only.
fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_service() -> TodoService {
        TodoService::new(Arc::new(TodoStore::default()))
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let service = make_service();
        let result = service.create_todo(NewTodo::new("   ")).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
        assert!(service.store().is_empty().await);
    }

    #[tokio::test]
    async fn update_rejects_blank_title_without_touching_record() {
        let service = make_service();
        let Ok(created) = service.create_todo(NewTodo::new("keep")).await else {
            panic!("create failed");
        };
        let patch = TodoPatch {
            title: Some(String::new()),
            ..TodoPatch::default()
        };
        let result = service.update_todo(created.id, patch).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));

        let Ok(current) = service.get_todo(created.id).await else {
            panic!("record should exist");
        };
        assert_eq!(current, created);
    }

    #[tokio::test]
    async fn missing_ids_become_not_found() {
        let service = make_service();
        let id = TodoId::new(999);
        assert!(matches!(
            service.get_todo(id).await,
            Err(ApiError::TodoNotFound(_))
        ));
        assert!(matches!(
            service.update_todo(id, TodoPatch::default()).await,
            Err(ApiError::TodoNotFound(_))
        ));
        assert!(matches!(
            service.delete_todo(id).await,
            Err(ApiError::TodoNotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_then_list_reflects_change() {
        let service = make_service();
        let Ok(created) = service.create_todo(NewTodo::new("task")).await else {
            panic!("create failed");
        };
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let Ok(updated) = service.update_todo(created.id, patch).await else {
            panic!("update failed");
        };
        assert!(updated.completed);

        let todos = service.list_todos().await;
        assert_eq!(todos, vec![updated]);
    }
}

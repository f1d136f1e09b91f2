//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::TodoService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// To-do service for all business logic.
    pub todo_service: Arc<TodoService>,
    /// Loaded configuration, read by the system endpoints.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wires a fresh, empty store and service from `config`.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(crate::domain::TodoStore::new(config.timezone));
        Self {
            todo_service: Arc::new(TodoService::new(store)),
            config: Arc::new(config),
        }
    }
}

//! Service layer: business logic orchestration.
//!
//! [`TodoService`] validates requests, delegates storage to
//! [`super::domain::TodoStore`], and converts absence into API errors.

pub mod todo_service;

pub use todo_service::TodoService;

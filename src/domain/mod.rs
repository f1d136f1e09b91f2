//! Domain layer: to-do identity, records, and the in-memory store.
//!
//! Nothing in here knows about HTTP. The store signals absence with
//! `Option` / `bool`; the service layer decides what absence means to a
//! client.

pub mod todo;
pub mod todo_id;
pub mod todo_store;

pub use todo::{NewTodo, TodoPatch, TodoRecord};
pub use todo_id::TodoId;
pub use todo_store::TodoStore;

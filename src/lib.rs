//! # todo-boilerplate
//!
//! Starter template for a small REST API, demonstrated with a single
//! To-Do resource backed by an in-memory store.
//!
//! Replace the to-do domain with your own resource; the layering,
//! configuration, error envelope, logging and documentation wiring stay.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + OpenAPI (api/)
//!     │
//!     ├── TodoService (service/)
//!     │
//!     └── TodoStore, in memory (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

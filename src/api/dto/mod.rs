//! Data Transfer Objects for REST request/response serialization.
//!
//! Timestamps are serialized as RFC 3339 strings carrying the UTC offset
//! of the configured timezone.

pub mod todo_dto;

pub use todo_dto::*;

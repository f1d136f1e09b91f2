//! Type-safe to-do identifier.
//!
//! [`TodoId`] is a newtype wrapper around `i64` so that to-do identifiers
//! cannot be confused with other integers (page numbers, counts, ...).

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a to-do record.
///
/// Issued by [`super::TodoStore`] in strictly increasing order starting at
/// 1 and never reused. Any integer may be used for lookups; ids the store
/// never issued (including zero and negatives) simply resolve to nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from a raw integer.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

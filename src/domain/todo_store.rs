//! In-memory to-do storage with a store-owned id sequence.
//!
//! [`TodoStore`] keeps every record in a `BTreeMap` keyed by [`TodoId`]
//! behind a single [`tokio::sync::RwLock`]. Each mutating operation runs
//! entirely under the write lock, so id assignment, insertion and counter
//! advance (or lookup, merge and write-back) are one atomic step.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use chrono_tz::Tz;
use tokio::sync::RwLock;

use super::TodoId;
use super::todo::{NewTodo, TodoPatch, TodoRecord};
use crate::config::DEFAULT_TIMEZONE;

/// Lock-protected state: the records and the next id to hand out.
#[derive(Debug)]
struct StoreState {
    next_id: TodoId,
    records: BTreeMap<TodoId, TodoRecord>,
}

/// Owner of all to-do records and of the id generator.
///
/// Absence is an ordinary outcome here: lookups return `Option` and
/// deletes return `bool`. Mapping absence to a protocol error is left to
/// callers.
///
/// # Concurrency
///
/// - Reads (`get`, `list_all`) may run concurrently.
/// - Writes (`create`, `update`, `delete`) are serialized.
#[derive(Debug)]
pub struct TodoStore {
    timezone: Tz,
    state: RwLock<StoreState>,
}

impl TodoStore {
    /// Creates an empty store that stamps records in `timezone`.
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            state: RwLock::new(StoreState {
                next_id: TodoId::FIRST,
                records: BTreeMap::new(),
            }),
        }
    }

    /// Returns every stored record in ascending id order.
    pub async fn list_all(&self) -> Vec<TodoRecord> {
        self.state.read().await.records.values().cloned().collect()
    }

    /// Returns the record with the given id, or `None` if there is none.
    pub async fn get(&self, id: TodoId) -> Option<TodoRecord> {
        self.state.read().await.records.get(&id).cloned()
    }

    /// Stores a new record and returns it with its generated fields.
    ///
    /// The record receives the current counter value as its id and the
    /// counter advances by one. Ids are never reused, even after deletes.
    pub async fn create(&self, new: NewTodo) -> TodoRecord {
        let mut state = self.state.write().await;
        let id = state.next_id;
        let now = self.now();
        let record = TodoRecord {
            id,
            title: new.title,
            description: new.description,
            completed: new.completed,
            created_at: now,
            updated_at: now,
        };
        state.records.insert(id, record.clone());
        state.next_id = id.next();
        record
    }

    /// Applies `patch` to the record with the given id.
    ///
    /// `updated_at` is re-stamped even when the patch is empty. Returns
    /// `None` without inserting anything if the id is unknown.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Option<TodoRecord> {
        let mut state = self.state.write().await;
        let record = state.records.get_mut(&id)?;
        patch.apply_to(record);
        record.updated_at = self.stamp_after(record.updated_at);
        Some(record.clone())
    }

    /// Removes the record with the given id. Returns `false` if absent.
    pub async fn delete(&self, id: TodoId) -> bool {
        self.state.write().await.records.remove(&id).is_some()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.timezone).fixed_offset()
    }

    /// Current time, bumped past `previous` if the clock has not advanced.
    fn stamp_after(&self, previous: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let now = self.now();
        if now > previous {
            return now;
        }
        previous
            .checked_add_signed(TimeDelta::microseconds(1))
            .unwrap_or(now)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn seed(title: &str) -> NewTodo {
        NewTodo::new(title).with_description("")
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let store = TodoStore::default();
        let a = store.create(seed("a")).await;
        let b = store.create(seed("b")).await;
        let c = store.create(seed("c")).await;
        assert_eq!(a.id.get(), 1);
        assert_eq!(b.id.get(), 2);
        assert_eq!(c.id.get(), 3);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = TodoStore::default();
        let a = store.create(seed("a")).await;
        let b = store.create(seed("b")).await;
        assert!(store.delete(b.id).await);
        assert!(store.delete(a.id).await);

        let c = store.create(seed("c")).await;
        assert_eq!(c.id.get(), 3);
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let store = TodoStore::default();
        let record = store.create(NewTodo::new("plain")).await;
        assert_eq!(record.title, "plain");
        assert!(record.description.is_none());
        assert!(!record.completed);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let store = TodoStore::default();
        let created = store
            .create(NewTodo::new("round").with_description("trip"))
            .await;
        let Some(fetched) = store.get(created.id).await else {
            panic!("record should exist");
        };
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_ids_signal_absence() {
        let store = TodoStore::default();
        let id = TodoId::new(999);
        assert!(store.get(id).await.is_none());
        assert!(store.update(id, TodoPatch::default()).await.is_none());
        assert!(!store.delete(id).await);
        assert!(store.get(TodoId::new(-5)).await.is_none());
    }

    #[tokio::test]
    async fn update_does_not_upsert() {
        let store = TodoStore::default();
        let patch = TodoPatch {
            title: Some("ghost".to_string()),
            ..TodoPatch::default()
        };
        assert!(store.update(TodoId::FIRST, patch).await.is_none());
        assert!(store.is_empty().await);

        // The failed update must not consume an id either.
        let created = store.create(seed("real")).await;
        assert_eq!(created.id, TodoId::FIRST);
    }

    #[tokio::test]
    async fn update_preserves_untouched_fields() {
        let store = TodoStore::default();
        let created = store.create(NewTodo::new("A").with_description("B")).await;

        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let Some(updated) = store.update(created.id, patch).await else {
            panic!("record should exist");
        };
        assert_eq!(updated.title, "A");
        assert_eq!(updated.description.as_deref(), Some("B"));
        assert!(updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn empty_update_still_restamps() {
        let store = TodoStore::default();
        let created = store.create(seed("x")).await;
        let Some(first) = store.update(created.id, TodoPatch::default()).await else {
            panic!("record should exist");
        };
        let Some(second) = store.update(created.id, TodoPatch::default()).await else {
            panic!("record should exist");
        };
        assert!(first.updated_at > created.updated_at);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.title, "x");
        assert!(second.created_at <= second.updated_at);
    }

    #[tokio::test]
    async fn delete_twice_returns_true_then_false() {
        let store = TodoStore::default();
        let created = store.create(seed("x")).await;
        assert!(store.delete(created.id).await);
        assert!(!store.delete(created.id).await);
        assert!(store.get(created.id).await.is_none());
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_id() {
        let store = TodoStore::default();
        for i in 0..12 {
            let _ = store.create(seed(&format!("t{i}"))).await;
        }
        let _ = store.delete(TodoId::new(5)).await;

        let ids: Vec<i64> = store.list_all().await.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(store.len().await, 11);
    }

    #[tokio::test]
    async fn timestamps_carry_configured_offset() {
        let store = TodoStore::new(chrono_tz::Asia::Tokyo);
        let record = store.create(seed("tz")).await;
        assert_eq!(record.created_at.offset().local_minus_utc(), 9 * 3600);
    }

    #[tokio::test]
    async fn concurrent_creates_yield_unique_ids() {
        let store = Arc::new(TodoStore::default());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(seed(&format!("c{i}"))).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            let Ok(id) = handle.await else {
                panic!("task panicked");
            };
            ids.push(id.get());
        }
        ids.sort_unstable();
        let expected: Vec<i64> = (1..=50).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn concurrent_updates_keep_every_write() {
        let store = Arc::new(TodoStore::default());
        let created = store.create(seed("start")).await;
        let id = created.id;

        let patches = [
            TodoPatch {
                title: Some("renamed".to_string()),
                ..TodoPatch::default()
            },
            TodoPatch {
                description: Some("details".to_string()),
                ..TodoPatch::default()
            },
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            },
        ];
        let mut handles = Vec::new();
        for patch in patches {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.update(id, patch).await }));
        }
        for _ in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.update(id, TodoPatch::default()).await
            }));
        }

        let mut stamps = Vec::new();
        for handle in handles {
            let Ok(Some(record)) = handle.await else {
                panic!("update should find the record");
            };
            assert_eq!(record.created_at, created.created_at);
            stamps.push(record.updated_at);
        }

        // Writes are serialized, so every returned stamp is distinct.
        stamps.sort_unstable();
        assert!(stamps.windows(2).all(|w| w.first() < w.last()));
        assert!(stamps.iter().all(|stamp| *stamp > created.updated_at));

        let Some(last) = store.get(id).await else {
            panic!("record should exist");
        };
        assert_eq!(last.title, "renamed");
        assert_eq!(last.description.as_deref(), Some("details"));
        assert!(last.completed);
        assert_eq!(stamps.last(), Some(&last.updated_at));
    }

    #[tokio::test]
    async fn seed_scenario() {
        let store = TodoStore::default();
        let s1 = store.create(seed("Seed 1")).await;
        let s2 = store.create(seed("Seed 2").with_completed(true)).await;
        assert_eq!(s1.id.get(), 1);
        assert!(!s1.completed);
        assert_eq!(s2.id.get(), 2);
        assert_eq!(store.list_all().await.len(), 2);

        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let _ = store.update(s1.id, patch).await;
        let Some(s1_now) = store.get(s1.id).await else {
            panic!("seed 1 should exist");
        };
        assert!(s1_now.completed);

        assert!(store.delete(s2.id).await);
        assert!(store.get(s2.id).await.is_none());

        let remaining = store.list_all().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().map(|r| r.id), Some(s1.id));
    }
}

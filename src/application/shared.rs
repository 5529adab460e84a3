//! Thread-safe handle to a ListStore

use crate::application::ListStore;
use crate::domain::Record;
use crate::infrastructure::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Clonable handle that serializes every operation on one ListStore.
///
/// Each call holds the lock across both the in-memory change and the
/// storage write, so no caller ever writes from a stale snapshot.
#[derive(Debug)]
pub struct SharedListStore<S> {
    inner: Arc<Mutex<ListStore<S>>>,
}

impl<S> Clone for SharedListStore<S> {
    fn clone(&self) -> Self {
        SharedListStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> SharedListStore<S> {
    pub fn new(store: ListStore<S>) -> Self {
        SharedListStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(&self, name: &str) -> Record {
        self.lock().add(name)
    }

    pub fn delete(&self, id: i64) {
        self.lock().delete(id)
    }

    pub fn update(&self, id: i64, new_value: &str) {
        self.lock().update(id, new_value)
    }

    pub fn flush(&self) -> bool {
        self.lock().flush()
    }

    /// Snapshot of the current sequence
    pub fn records(&self) -> Vec<Record> {
        self.lock().records().to_vec()
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().is_dirty()
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut ListStore<S>) -> R) -> R {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ListStore<S>> {
        // A panic inside another caller leaves the list itself consistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

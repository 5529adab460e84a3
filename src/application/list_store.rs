//! Persisted list of records
//!
//! Every mutation applies to the in-memory sequence first and then writes
//! the whole sequence under [`STORAGE_KEY`]. Persistence failures are logged
//! and never returned to the caller. A failed write leaves the store dirty;
//! the next successful write (any later mutation, or [`ListStore::flush`])
//! brings storage back in line with memory.

use crate::domain::{record, IdStrategy, Record};
use crate::infrastructure::KeyValueStore;

/// Key the serialized sequence is stored under
pub const STORAGE_KEY: &str = "data";

/// Result of reading the persisted sequence at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing stored yet
    Empty,
    /// Stored sequence restored with this many records
    Loaded(usize),
    /// Read or parse failed; the sequence was left empty
    Failed,
}

/// Ordered records mirrored into a key-value store
#[derive(Debug)]
pub struct ListStore<S> {
    backend: S,
    strategy: IdStrategy,
    records: Vec<Record>,
    dirty: bool,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Create an empty, unloaded store
    pub fn new(backend: S, strategy: IdStrategy) -> Self {
        ListStore {
            backend,
            strategy,
            records: Vec::new(),
            dirty: false,
        }
    }

    /// Create a store and load the persisted sequence into it
    pub fn open(backend: S, strategy: IdStrategy) -> Self {
        let mut store = Self::new(backend, strategy);
        store.load();
        store
    }

    /// Replace the in-memory sequence with the persisted one
    pub fn load(&mut self) -> LoadStatus {
        self.records.clear();
        self.dirty = false;

        let blob = match self.backend.get(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = STORAGE_KEY, "No stored list, starting empty");
                return LoadStatus::Empty;
            }
            Err(e) => {
                tracing::error!(key = STORAGE_KEY, error = %e, "Error loading data");
                return LoadStatus::Failed;
            }
        };

        match record::decode(&blob) {
            Ok(records) => {
                self.records = records;
                tracing::info!(count = self.records.len(), "List loaded");
                LoadStatus::Loaded(self.records.len())
            }
            Err(e) => {
                tracing::error!(key = STORAGE_KEY, error = %e, "Error loading data");
                LoadStatus::Failed
            }
        }
    }

    /// Append a record named `name` and persist
    pub fn add(&mut self, name: &str) -> Record {
        let record = Record::new(self.strategy.next_id(&self.records), name);
        self.records.push(record.clone());
        tracing::debug!(id = record.id, "Record added");
        self.persist("saving");
        record
    }

    /// Remove every record with `id` and persist
    pub fn delete(&mut self, id: i64) {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        tracing::debug!(id, removed = before - self.records.len(), "Delete applied");
        self.persist("deleting");
    }

    /// Set `first` on every record with `id` and persist
    pub fn update(&mut self, id: i64, new_value: &str) {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| r.id == id) {
            record.first = new_value.to_string();
            changed += 1;
        }
        tracing::debug!(id, changed, "Update applied");
        self.persist("editing");
    }

    /// Write the current sequence again. Returns true when storage is in sync.
    pub fn flush(&mut self) -> bool {
        self.persist("flushing")
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First record with `id`
    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True while the last write failed and memory is ahead of storage
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn persist(&mut self, action: &str) -> bool {
        let result = record::encode(&self.records)
            .map_err(crate::error::RosterError::from)
            .and_then(|blob| self.backend.set(STORAGE_KEY, &blob));

        match result {
            Ok(()) => {
                if self.dirty {
                    tracing::info!(count = self.records.len(), "Storage back in sync");
                }
                self.dirty = false;
                true
            }
            Err(e) => {
                tracing::error!(key = STORAGE_KEY, error = %e, "Error {} data", action);
                self.dirty = true;
                false
            }
        }
    }
}

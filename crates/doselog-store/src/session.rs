//! Session-scoped snapshot of one collection.
//!
//! Presentation code renders from the last fetched snapshot instead of
//! re-reading the backend on every view. The cache is an explicitly owned
//! object handed to whoever needs it, not ambient global state.

use crate::codec::FlatRecord;
use crate::error::StoreResult;
use crate::store::RecordStore;

/// Read-through cache over one collection's store.
///
/// The first `records` access fetches; later accesses reuse the snapshot.
/// Mutations go through the cache so it can drop the stale snapshot.
pub struct SessionCache<R: FlatRecord> {
    store: RecordStore<R>,
    snapshot: Option<Vec<R>>,
}

impl<R: FlatRecord> SessionCache<R> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self {
            store,
            snapshot: None,
        }
    }

    /// The cached records, fetching on first access.
    pub fn records(&mut self) -> StoreResult<&[R]> {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.store.list()?);
        }
        Ok(self.snapshot.as_deref().unwrap_or(&[]))
    }

    /// Drop the snapshot; the next access re-fetches.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn create(&mut self, record: R) -> StoreResult<R> {
        let created = self.store.create(record)?;
        self.invalidate();
        Ok(created)
    }

    pub fn update(&mut self, id: &str, patch: R::Patch) -> StoreResult<R> {
        let updated = self.store.update(id, patch)?;
        self.invalidate();
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        self.store.delete(id)?;
        self.invalidate();
        Ok(())
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }
}

//! Identity-based CRUD over one collection.

use std::marker::PhantomData;

use doselog_domain::{Entry, Note};
use uuid::Uuid;

use crate::backend::SharedBackend;
use crate::codec::{FieldMap, FlatRecord, Row};
use crate::error::{StoreError, StoreResult};

/// Collection name for observation entries.
pub const ENTRIES: &str = "entries";

/// Collection name for reflection notes.
pub const NOTES: &str = "notes";

/// CRUD over one collection, composed from a storage backend and the
/// `FlatRecord` codec for `R`.
///
/// Every operation is a whole-collection read-modify-write round trip:
/// O(collection size), no locking, last write wins. Acceptable because
/// collections are personal-scale small.
pub struct RecordStore<R: FlatRecord> {
    backend: SharedBackend,
    collection: String,
    _record: PhantomData<R>,
}

impl<R: FlatRecord> RecordStore<R> {
    pub fn new(backend: SharedBackend, collection: impl Into<String>) -> Self {
        Self {
            backend,
            collection: collection.into(),
            _record: PhantomData,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// All records, decoded in storage order. Callers apply their own
    /// sort/filter.
    pub fn list(&self) -> StoreResult<Vec<R>> {
        let mut rows = self.backend.read_all(&self.collection)?.into_iter();
        let header = match rows.next() {
            Some(header) => header,
            None => return Ok(Vec::new()),
        };
        let fields = FieldMap::new(&header);
        Ok(rows.map(|row| R::from_row(&fields, &row)).collect())
    }

    /// Persist `record`, assigning a fresh unique id when it arrives
    /// without one and its kind uses generated ids. Returns the stored
    /// record, id included.
    pub fn create(&self, mut record: R) -> StoreResult<R> {
        if R::AUTO_ID && record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        let mut records = self.list()?;
        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }

    /// Overlay `patch` on the record with `id`. The stored id always
    /// survives, whatever identity the patch carried.
    pub fn update(&self, id: &str, patch: R::Patch) -> StoreResult<R> {
        let mut records = self.list()?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut merged = records[position].merge(patch);
        merged.set_id(id.to_string());
        records[position] = merged.clone();
        self.write_all(&records)?;
        Ok(merged)
    }

    /// Remove the record with `id`, or `NotFound` when no record matches.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write_all(&records)
    }

    fn write_all(&self, records: &[R]) -> StoreResult<()> {
        let mut rows: Vec<Row> = Vec::with_capacity(records.len() + 1);
        rows.push(R::FIELDS.iter().map(|field| field.to_string()).collect());
        rows.extend(records.iter().map(FlatRecord::to_row));
        self.backend.replace_all(&self.collection, &rows)
    }
}

impl RecordStore<Entry> {
    /// Store for the entries collection.
    pub fn entries(backend: SharedBackend) -> Self {
        Self::new(backend, ENTRIES)
    }
}

impl RecordStore<Note> {
    /// Store for the notes collection.
    pub fn notes(backend: SharedBackend) -> Self {
        Self::new(backend, NOTES)
    }
}

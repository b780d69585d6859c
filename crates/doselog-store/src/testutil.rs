//! In-memory backends for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::{SharedBackend, StorageBackend};
use crate::codec::Row;
use crate::error::{StoreError, StoreResult};

/// Backend holding collections in a map, counting reads.
#[derive(Default)]
pub struct MemoryBackend {
    collections: Mutex<HashMap<String, Vec<Row>>>,
    reads: AtomicUsize,
}

impl MemoryBackend {
    pub fn shared() -> Arc<MemoryBackend> {
        Arc::new(MemoryBackend::default())
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemoryBackend {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Row>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let collections = self.collections.lock().unwrap();
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn replace_all(&self, collection: &str, rows: &[Row]) -> StoreResult<()> {
        let mut collections = self.collections.lock().unwrap();
        collections.insert(collection.to_string(), rows.to_vec());
        Ok(())
    }
}

/// Backend whose writes fail, for unavailable-storage paths.
pub struct WriteFailingBackend {
    inner: MemoryBackend,
}

impl WriteFailingBackend {
    pub fn shared() -> SharedBackend {
        Arc::new(WriteFailingBackend {
            inner: MemoryBackend::default(),
        })
    }
}

impl StorageBackend for WriteFailingBackend {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Row>> {
        self.inner.read_all(collection)
    }

    fn replace_all(&self, _collection: &str, _rows: &[Row]) -> StoreResult<()> {
        Err(StoreError::Unavailable("write refused".to_string()))
    }
}

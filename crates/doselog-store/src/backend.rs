//! Storage backend capability.

use std::sync::Arc;

use crate::codec::Row;
use crate::error::StoreResult;

/// Durable, whole-collection read/replace over some tabular medium.
///
/// Rows include the header row. A collection that has never been written
/// reads as an empty grid, not an error. I/O failures surface as
/// [`crate::StoreError::Unavailable`]; they are never swallowed here.
pub trait StorageBackend: Send + Sync {
    /// All rows of the collection, in storage order.
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Row>>;

    /// Fully overwrite the collection with `rows`, so that a subsequent
    /// `read_all` returns exactly what was written.
    fn replace_all(&self, collection: &str, rows: &[Row]) -> StoreResult<()>;
}

/// A backend shared by the stores of several collections.
pub type SharedBackend = Arc<dyn StorageBackend>;

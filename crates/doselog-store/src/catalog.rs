//! Per-category substance catalogs.

use doselog_domain::{Substance, SubstanceKind};

use crate::backend::SharedBackend;
use crate::error::StoreResult;
use crate::store::RecordStore;

/// Collection name for one category's catalog.
pub fn catalog_collection(kind: SubstanceKind) -> String {
    format!("substances_{}", kind)
}

/// Three independent catalogs (one per category) over a shared backend,
/// used to populate selectable choices and to take new names on the fly.
/// Catalogs are append-only from the core's perspective.
pub struct SubstanceCatalog {
    medications: RecordStore<Substance>,
    supplements: RecordStore<Substance>,
    foods: RecordStore<Substance>,
}

impl SubstanceCatalog {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            medications: RecordStore::new(
                backend.clone(),
                catalog_collection(SubstanceKind::Medication),
            ),
            supplements: RecordStore::new(
                backend.clone(),
                catalog_collection(SubstanceKind::Supplement),
            ),
            foods: RecordStore::new(backend, catalog_collection(SubstanceKind::Food)),
        }
    }

    /// The store behind one category.
    pub fn store(&self, kind: SubstanceKind) -> &RecordStore<Substance> {
        match kind {
            SubstanceKind::Medication => &self.medications,
            SubstanceKind::Supplement => &self.supplements,
            SubstanceKind::Food => &self.foods,
        }
    }

    /// Catalog items of one category, in storage order.
    pub fn list(&self, kind: SubstanceKind) -> StoreResult<Vec<Substance>> {
        self.store(kind).list()
    }

    /// Create the item unless the category already holds the exact name
    /// (case-sensitive). Returns the existing or newly created item. A
    /// blank name has nothing to catalog and is returned without being
    /// stored.
    pub fn add_if_absent(&self, kind: SubstanceKind, name: &str) -> StoreResult<Substance> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Substance::new(""));
        }
        let store = self.store(kind);
        if let Some(existing) = store.list()?.into_iter().find(|item| item.name == name) {
            return Ok(existing);
        }
        store.create(Substance::new(name))
    }
}

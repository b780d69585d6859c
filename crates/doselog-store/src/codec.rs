//! Flat row codec: records to and from rows of textual cells.
//!
//! Each record kind declares an ordered header (`FlatRecord::FIELDS`) for
//! encoding; decoding maps cells by the NAME in the collection's actual
//! header row, so a file whose columns were reordered still decodes.
//! Array-valued fields travel as a JSON array inside a single cell, which
//! round-trips empty arrays, embedded punctuation and one-element arrays
//! without ambiguity.

/// One row of cells in the backing medium.
pub type Row = Vec<String>;

/// Maps field names to cell positions using a collection's header row.
#[derive(Debug, Clone)]
pub struct FieldMap {
    names: Vec<String>,
}

impl FieldMap {
    pub fn new(header: &[String]) -> Self {
        Self {
            names: header.to_vec(),
        }
    }

    /// Position of a field in the header, if present.
    pub fn index(&self, field: &str) -> Option<usize> {
        self.names.iter().position(|name| name == field)
    }

    /// The cell for `field` in `row`; empty when the column is absent or
    /// the row is short.
    pub fn cell<'a>(&self, row: &'a [String], field: &str) -> &'a str {
        self.index(field)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A record that maps losslessly onto one flat row.
pub trait FlatRecord: Clone {
    /// Partial-update type accepted by `update`.
    type Patch;

    /// Declared column order; the first row of every written collection.
    const FIELDS: &'static [&'static str];

    /// Whether `create` assigns a generated id when the record arrives
    /// without one. Kinds whose identity is a business field in its own
    /// right (a catalog item's name) opt out and are stored as given.
    const AUTO_ID: bool = true;

    /// The record's identity. Empty means "not yet assigned".
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Encode into one row of cells, in `FIELDS` order. Never drops a
    /// declared field.
    fn to_row(&self) -> Row;

    /// Decode from a row using the collection's actual header layout.
    /// Malformed cells degrade to the field's default instead of losing
    /// the row.
    fn from_row(fields: &FieldMap, row: &[String]) -> Self;

    /// Patch fields overlaid on this record; id handling belongs to the
    /// store.
    fn merge(&self, patch: Self::Patch) -> Self;
}

/// Serialize an ordered sequence into one cell as a JSON array.
pub fn encode_seq<T: ToString>(items: &[T]) -> String {
    let strings: Vec<String> = items.iter().map(ToString::to_string).collect();
    serde_json::to_string(&strings).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON-array cell. An empty, absent, or malformed cell decodes
/// to an empty sequence (logged, non-fatal) rather than failing the row.
pub fn decode_seq(cell: &str) -> Vec<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(cell) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("malformed sequence cell {:?}: {}", cell, err);
            Vec::new()
        }
    }
}

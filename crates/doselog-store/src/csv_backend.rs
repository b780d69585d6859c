//! Local delimited-file backend: one CSV file per collection.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use crate::backend::StorageBackend;
use crate::codec::Row;
use crate::error::{StoreError, StoreResult};

/// Stores each collection as `<dir>/<collection>.csv`.
pub struct CsvBackend {
    dir: PathBuf,
}

impl CsvBackend {
    /// Backend rooted at `dir`; the directory is created if missing.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            StoreError::Unavailable(format!("create {}: {}", dir.display(), err))
        })?;
        Ok(Self { dir })
    }

    fn file_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", collection))
    }
}

impl StorageBackend for CsvBackend {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Row>> {
        let path = self.file_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path).map_err(|err| {
            StoreError::Unavailable(format!("open {}: {}", path.display(), err))
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| {
                StoreError::Unavailable(format!("parse {}: {}", path.display(), err))
            })?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        tracing::debug!("read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn replace_all(&self, collection: &str, rows: &[Row]) -> StoreResult<()> {
        let path = self.file_path(collection);
        // Write beside the target, then rename over it, so readers never
        // observe a half-written file.
        let staging = self.dir.join(format!("{}.csv.tmp", collection));

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&staging)
            .map_err(|err| {
                StoreError::Unavailable(format!("create {}: {}", staging.display(), err))
            })?;
        for row in rows {
            writer.write_record(row).map_err(|err| {
                StoreError::Unavailable(format!("write {}: {}", staging.display(), err))
            })?;
        }
        writer.flush().map_err(|err| {
            StoreError::Unavailable(format!("flush {}: {}", staging.display(), err))
        })?;
        drop(writer);

        fs::rename(&staging, &path).map_err(|err| {
            StoreError::Unavailable(format!("replace {}: {}", path.display(), err))
        })?;
        tracing::debug!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn grid(rows: &[&[&str]]) -> Vec<Row> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn missing_collection_reads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::open(dir.path()).unwrap();
        assert!(backend.read_all("entries").unwrap().is_empty());
    }

    #[test]
    fn replace_then_read_returns_what_was_written() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::open(dir.path()).unwrap();

        let rows = grid(&[
            &["id", "date", "text"],
            &["n-1", "2024-05-02", "slept badly"],
        ]);
        backend.replace_all("notes", &rows).unwrap();
        assert_eq!(backend.read_all("notes").unwrap(), rows);
    }

    #[test]
    fn replace_fully_overwrites() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::open(dir.path()).unwrap();

        backend
            .replace_all("notes", &grid(&[&["id"], &["n-1"], &["n-2"]]))
            .unwrap();
        backend.replace_all("notes", &grid(&[&["id"]])).unwrap();
        assert_eq!(backend.read_all("notes").unwrap(), grid(&[&["id"]]));
    }

    #[test]
    fn awkward_cells_round_trip() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::open(dir.path()).unwrap();

        let rows = grid(&[
            &["id", "text"],
            &["n-1", "commas, \"quotes\" and\nnewlines"],
            &["n-2", "[\"a,b\",\"c:d\"]"],
        ]);
        backend.replace_all("notes", &rows).unwrap();
        assert_eq!(backend.read_all("notes").unwrap(), rows);
    }

    #[test]
    fn collections_are_independent_files() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::open(dir.path()).unwrap();

        backend
            .replace_all("entries", &grid(&[&["id"], &["e-1"]]))
            .unwrap();
        backend
            .replace_all("notes", &grid(&[&["id"], &["n-1"]]))
            .unwrap();

        assert_eq!(backend.read_all("entries").unwrap(), grid(&[&["id"], &["e-1"]]));
        assert_eq!(backend.read_all("notes").unwrap(), grid(&[&["id"], &["n-1"]]));
        assert!(dir.path().join("entries.csv").exists());
        assert!(dir.path().join("notes.csv").exists());
    }
}

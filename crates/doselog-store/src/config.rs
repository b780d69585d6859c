//! Storage configuration: which backend, and where.
//!
//! The calling layer decides the medium at startup and hands the opened
//! backend to the stores. Credentials are carried as an opaque token
//! supplied by the caller; obtaining one is outside this crate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::SharedBackend;
use crate::error::{StoreError, StoreResult};

fn default_sheet_base_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets/".to_string()
}

/// Top-level configuration, loadable from TOML:
///
/// ```toml
/// [storage]
/// kind = "csv"
/// dir = "./data"
/// ```
///
/// or, for the remote backend:
///
/// ```toml
/// [storage]
/// kind = "sheet"
/// spreadsheet_id = "1AbC..."
/// token = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub storage: BackendConfig,
}

/// Backend selection. Each variant carries only what its medium needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// One delimited file per collection under `dir`.
    Csv { dir: PathBuf },
    /// One range per collection in a remote spreadsheet.
    Sheet {
        #[serde(default = "default_sheet_base_url")]
        base_url: String,
        spreadsheet_id: String,
        token: String,
    },
}

impl BackendConfig {
    pub fn kind_name(&self) -> &'static str {
        match self {
            BackendConfig::Csv { .. } => "csv",
            BackendConfig::Sheet { .. } => "sheet",
        }
    }
}

impl StorageConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            StoreError::Unavailable(format!("read {}: {}", path.display(), err))
        })?;
        Self::from_toml(&content).map_err(|err| {
            StoreError::Unavailable(format!("parse {}: {}", path.display(), err))
        })
    }

    /// Open the configured backend.
    pub fn open(&self) -> StoreResult<SharedBackend> {
        match &self.storage {
            #[cfg(feature = "csv")]
            BackendConfig::Csv { dir } => Ok(std::sync::Arc::new(
                crate::csv_backend::CsvBackend::open(dir.clone())?,
            )),

            #[cfg(feature = "sheets")]
            BackendConfig::Sheet {
                base_url,
                spreadsheet_id,
                token,
            } => Ok(std::sync::Arc::new(crate::sheet_backend::SheetBackend::open(
                base_url,
                spreadsheet_id.clone(),
                token.clone(),
            )?)),

            #[allow(unreachable_patterns)]
            other => Err(StoreError::Unavailable(format!(
                "backend '{}' not compiled in",
                other.kind_name()
            ))),
        }
    }
}

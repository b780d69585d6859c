//! doselog-store - flat-row persistence for the doselog journal
//!
//! Records are persisted one row of cells per record into a tabular
//! medium behind the `StorageBackend` capability:
//!
//! - **CsvBackend**: one delimited file per collection on local disk
//! - **SheetBackend**: one range per collection in a remote spreadsheet
//!
//! `RecordStore` composes a backend with the `FlatRecord` codec to give
//! identity-based CRUD with merge-on-update semantics. Every mutation is
//! a whole-collection read-modify-write; collections are expected to stay
//! personal-scale small, and there is no cross-writer conflict handling
//! (last write wins).

pub mod backend;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

// FlatRecord implementations for the domain record kinds.
mod records;

#[cfg(feature = "csv")]
pub mod csv_backend;

#[cfg(feature = "sheets")]
pub mod sheet_backend;

pub use backend::*;
pub use catalog::*;
pub use codec::*;
pub use config::*;
pub use error::*;
pub use session::*;
pub use store::*;

#[cfg(feature = "csv")]
pub use csv_backend::CsvBackend;

#[cfg(feature = "sheets")]
pub use sheet_backend::SheetBackend;

#[cfg(test)]
pub(crate) mod testutil;

//! doselog-domain - Record types for the doselog observation journal
//!
//! Three record kinds flow through the store:
//!
//! - **Entry**: one dated observation (substance taken, amount, symptoms,
//!   severity, environmental context, remarks)
//! - **Note**: a dated free-text reflection
//! - **Substance**: a catalog item naming something trackable
//!
//! Records are plain serde structs; identity and persistence live in
//! `doselog-store`. Wire field names are camelCase to match the persisted
//! header row.

pub mod entry;
pub mod factor;
pub mod note;
pub mod substance;

pub use entry::*;
pub use factor::*;
pub use note::*;
pub use substance::*;

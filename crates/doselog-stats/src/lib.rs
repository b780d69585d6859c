//! doselog-stats - derived views over a fetched entry snapshot
//!
//! Pure functions feeding the dashboard and analysis pages:
//!
//! - **summary**: totals, today's count, average severity, most-tracked
//! - **series**: severity-over-time points and the symptom histogram
//! - **filter**: history search/ordering and the substance dropdown
//!
//! Everything here is referentially transparent: no I/O, no mutation;
//! identical input always yields identical output. Callers fetch a
//! snapshot once and compute all views from it.

pub mod filter;
pub mod series;
pub mod summary;

pub use filter::*;
pub use series::*;
pub use summary::*;

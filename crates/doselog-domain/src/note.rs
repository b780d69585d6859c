//! Dated free-text reflection notes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated reflection, independent of any entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
}

/// Partial update for a note.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotePatch {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub text: Option<String>,
}

impl Note {
    /// Overlay supplied patch fields; the patch id is ignored.
    pub fn merged(&self, patch: NotePatch) -> Note {
        Note {
            id: self.id.clone(),
            date: patch.date.unwrap_or(self.date),
            text: patch.text.unwrap_or_else(|| self.text.clone()),
        }
    }
}

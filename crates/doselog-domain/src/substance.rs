//! Substance catalog items and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a trackable substance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstanceKind {
    Medication,
    Supplement,
    Food,
}

impl SubstanceKind {
    /// All categories, in display order.
    pub const ALL: [SubstanceKind; 3] = [
        SubstanceKind::Medication,
        SubstanceKind::Supplement,
        SubstanceKind::Food,
    ];

    /// Wire name, matching the `substanceType` field values.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstanceKind::Medication => "medication",
            SubstanceKind::Supplement => "supplement",
            SubstanceKind::Food => "food",
        }
    }
}

impl fmt::Display for SubstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized substance category name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown substance kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for SubstanceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medication" => Ok(SubstanceKind::Medication),
            "supplement" => Ok(SubstanceKind::Supplement),
            "food" => Ok(SubstanceKind::Food),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// A catalog item naming something trackable.
///
/// The category is implicit in which catalog collection the item lives in.
/// The name doubles as the item's identity: names are unique within one
/// category (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub name: String,
}

impl Substance {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Partial update for a catalog item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubstancePatch {
    pub name: Option<String>,
}

impl Substance {
    /// Overlay supplied patch fields on this item.
    pub fn merged(&self, patch: SubstancePatch) -> Substance {
        Substance {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
        }
    }
}

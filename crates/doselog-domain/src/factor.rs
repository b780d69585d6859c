//! Environmental factor labels.
//!
//! Factors are mostly plain labels ("Poor Sleep", "Alcohol"). The one
//! exception is the high-stress marker, which may carry a free-text
//! elaboration. The legacy flat layout stored that as a single string,
//! `"High Stress: <text>"`; here it is an explicit variant whose string
//! form stays byte-compatible with that layout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The reserved label for the high-stress factor.
pub const HIGH_STRESS: &str = "High Stress";

/// One environmental factor attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnvFactor {
    /// A plain factor label, e.g. "Poor Sleep".
    Label(String),
    /// The high-stress marker, with an optional elaboration.
    HighStress(Option<String>),
}

impl EnvFactor {
    /// Parse a factor from its string form.
    ///
    /// `"High Stress"` and `"High Stress: <text>"` become the tagged
    /// variant; anything else is a plain label. A marker with an empty
    /// elaboration normalizes to the bare marker.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix(HIGH_STRESS) {
            let rest = rest.trim_start();
            if rest.is_empty() {
                return EnvFactor::HighStress(None);
            }
            if let Some(detail) = rest.strip_prefix(':') {
                let detail = detail.trim();
                return if detail.is_empty() {
                    EnvFactor::HighStress(None)
                } else {
                    EnvFactor::HighStress(Some(detail.to_string()))
                };
            }
        }
        EnvFactor::Label(raw.to_string())
    }

    /// Plain label constructor.
    pub fn label(name: impl Into<String>) -> Self {
        EnvFactor::Label(name.into())
    }

    pub fn is_high_stress(&self) -> bool {
        matches!(self, EnvFactor::HighStress(_))
    }

    /// The elaboration attached to a high-stress marker, if any.
    pub fn stress_detail(&self) -> Option<&str> {
        match self {
            EnvFactor::HighStress(Some(detail)) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for EnvFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvFactor::Label(name) => f.write_str(name),
            EnvFactor::HighStress(None) => f.write_str(HIGH_STRESS),
            EnvFactor::HighStress(Some(detail)) => write!(f, "{}: {}", HIGH_STRESS, detail),
        }
    }
}

impl FromStr for EnvFactor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EnvFactor::parse(s))
    }
}

impl From<&str> for EnvFactor {
    fn from(s: &str) -> Self {
        EnvFactor::parse(s)
    }
}

// On the wire a factor is its string form, so JSON bodies and flat cells
// look identical to the legacy layout.
impl Serialize for EnvFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EnvFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EnvFactor::parse(&raw))
    }
}

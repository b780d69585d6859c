//! Time-series and histogram views for the charts.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use doselog_domain::Entry;
use serde::Serialize;

/// One point of the severity trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityPoint {
    pub at: NaiveDateTime,
    pub severity: i32,
}

/// Entries projected to a time-ordered severity series, optionally
/// filtered to one substance name. Sorted ascending by date and time;
/// entries whose severity does not parse are skipped.
pub fn severity_series(entries: &[Entry], substance: Option<&str>) -> Vec<SeverityPoint> {
    let mut selected: Vec<&Entry> = entries
        .iter()
        .filter(|entry| substance.map_or(true, |name| entry.substance_name == name))
        .collect();
    selected.sort_by_key(|entry| entry.timestamp());

    selected
        .into_iter()
        .filter_map(|entry| {
            entry.severity().map(|severity| SeverityPoint {
                at: entry.timestamp(),
                severity,
            })
        })
        .collect()
}

/// Frequency of each distinct symptom label across all entries.
pub fn symptom_histogram(entries: &[Entry]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        for symptom in &entry.post_dose_symptoms {
            *counts.entry(symptom.clone()).or_insert(0) += 1;
        }
    }
    counts
}

//! Dashboard summary numbers.

use std::collections::HashMap;

use chrono::NaiveDate;
use doselog_domain::Entry;
use serde::Serialize;

/// Number of entries in the snapshot.
pub fn total_count(entries: &[Entry]) -> usize {
    entries.len()
}

/// Number of entries dated `date`.
pub fn count_on_date(entries: &[Entry], date: NaiveDate) -> usize {
    entries
        .iter()
        .filter(|entry| entry.entry_date == date)
        .count()
}

/// Mean of the parseable severities. A severity contributes its leading
/// integer; values with no leading integer are excluded from the mean,
/// not treated as zero. Empty input (or no parseable value at all)
/// yields `0.0`.
pub fn average_severity(entries: &[Entry]) -> f64 {
    let severities: Vec<i32> = entries.iter().filter_map(Entry::severity).collect();
    if severities.is_empty() {
        return 0.0;
    }
    severities.iter().sum::<i32>() as f64 / severities.len() as f64
}

/// A substance name and how many entries track it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstanceCount {
    pub name: String,
    pub count: usize,
}

/// The substance with the most entries; ties go to the name encountered
/// first in the input. `None` when the snapshot is empty.
pub fn most_tracked(entries: &[Entry]) -> Option<SubstanceCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        let name = entry.substance_name.as_str();
        if name.is_empty() {
            continue;
        }
        if !counts.contains_key(name) {
            order.push(name);
        }
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for name in order {
        let count = counts[name];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    best.map(|(name, count)| SubstanceCount {
        name: name.to_string(),
        count,
    })
}

//! History view helpers: search, ordering and the substance dropdown.

use doselog_domain::{Entry, SubstanceKind};

/// Filter accepted by the history view.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive needle matched against every field of an entry.
    pub search: Option<String>,
    /// Restrict to one substance category.
    pub kind: Option<SubstanceKind>,
}

/// Entries matching the filter, in input order.
pub fn filter_entries(entries: &[Entry], filter: &HistoryFilter) -> Vec<Entry> {
    let needle = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|needle| !needle.is_empty());

    entries
        .iter()
        .filter(|entry| filter.kind.map_or(true, |kind| entry.substance_kind == kind))
        .filter(|entry| {
            needle
                .as_deref()
                .map_or(true, |needle| entry_matches(entry, needle))
        })
        .cloned()
        .collect()
}

fn entry_matches(entry: &Entry, needle: &str) -> bool {
    let scalars = [
        entry.substance_name.as_str(),
        entry.amount.as_str(),
        entry.symptom_severity.as_str(),
        entry.remarks.as_str(),
    ];
    if scalars
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
    {
        return true;
    }
    if entry.entry_date.to_string().contains(needle)
        || entry.entry_time.to_string().contains(needle)
    {
        return true;
    }
    if entry
        .post_dose_symptoms
        .iter()
        .any(|symptom| symptom.to_lowercase().contains(needle))
    {
        return true;
    }
    entry
        .environmental_factors
        .iter()
        .any(|factor| factor.to_string().to_lowercase().contains(needle))
}

/// Entries sorted most recent first: the history view's default order.
pub fn recent_first(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    sorted
}

/// Distinct substance names in first-encountered order, for the trend
/// filter dropdown.
pub fn tracked_substances(entries: &[Entry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        if entry.substance_name.is_empty() {
            continue;
        }
        if !names.contains(&entry.substance_name) {
            names.push(entry.substance_name.clone());
        }
    }
    names
}

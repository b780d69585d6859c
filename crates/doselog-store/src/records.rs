//! `FlatRecord` implementations for the journal's record kinds.
//!
//! Column order matches the legacy flat layout; times are written as
//! `HH:MM:SS` and read back from either `HH:MM:SS` or the older `HH:MM`
//! form.

use chrono::{NaiveDate, NaiveTime};
use doselog_domain::{
    EnvFactor, Entry, EntryPatch, Note, NotePatch, Substance, SubstanceKind, SubstancePatch,
};

use crate::codec::{decode_seq, encode_seq, FieldMap, FlatRecord, Row};

fn parse_date(field: &str, cell: &str) -> NaiveDate {
    if cell.is_empty() {
        return NaiveDate::default();
    }
    cell.parse().unwrap_or_else(|err| {
        tracing::warn!("malformed {} cell {:?}: {}", field, cell, err);
        NaiveDate::default()
    })
}

fn parse_time(field: &str, cell: &str) -> NaiveTime {
    if cell.is_empty() {
        return NaiveTime::default();
    }
    NaiveTime::parse_from_str(cell, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(cell, "%H:%M"))
        .unwrap_or_else(|err| {
            tracing::warn!("malformed {} cell {:?}: {}", field, cell, err);
            NaiveTime::default()
        })
}

fn parse_kind(cell: &str) -> SubstanceKind {
    // Unknown kinds fall back to food, the free-form category.
    cell.parse().unwrap_or_else(|_| {
        if !cell.is_empty() {
            tracing::warn!("unknown substanceType cell {:?}", cell);
        }
        SubstanceKind::Food
    })
}

impl FlatRecord for Entry {
    type Patch = EntryPatch;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "entryDate",
        "entryTime",
        "substanceType",
        "substanceName",
        "amount",
        "postDoseSymptoms",
        "symptomSeverity",
        "environmentalFactors",
        "remarks",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.entry_date.to_string(),
            self.entry_time.format("%H:%M:%S").to_string(),
            self.substance_kind.as_str().to_string(),
            self.substance_name.clone(),
            self.amount.clone(),
            encode_seq(&self.post_dose_symptoms),
            self.symptom_severity.clone(),
            encode_seq(&self.environmental_factors),
            self.remarks.clone(),
        ]
    }

    fn from_row(fields: &FieldMap, row: &[String]) -> Self {
        Entry {
            id: fields.cell(row, "id").to_string(),
            entry_date: parse_date("entryDate", fields.cell(row, "entryDate")),
            entry_time: parse_time("entryTime", fields.cell(row, "entryTime")),
            substance_kind: parse_kind(fields.cell(row, "substanceType")),
            substance_name: fields.cell(row, "substanceName").to_string(),
            amount: fields.cell(row, "amount").to_string(),
            post_dose_symptoms: decode_seq(fields.cell(row, "postDoseSymptoms")),
            symptom_severity: fields.cell(row, "symptomSeverity").to_string(),
            environmental_factors: decode_seq(fields.cell(row, "environmentalFactors"))
                .iter()
                .map(|raw| EnvFactor::parse(raw))
                .collect(),
            remarks: fields.cell(row, "remarks").to_string(),
        }
    }

    fn merge(&self, patch: EntryPatch) -> Self {
        self.merged(patch)
    }
}

impl FlatRecord for Note {
    type Patch = NotePatch;

    const FIELDS: &'static [&'static str] = &["id", "date", "text"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.date.to_string(),
            self.text.clone(),
        ]
    }

    fn from_row(fields: &FieldMap, row: &[String]) -> Self {
        Note {
            id: fields.cell(row, "id").to_string(),
            date: parse_date("date", fields.cell(row, "date")),
            text: fields.cell(row, "text").to_string(),
        }
    }

    fn merge(&self, patch: NotePatch) -> Self {
        self.merged(patch)
    }
}

// A catalog item's name IS its identity within the category collection,
// so the store must never replace it with a generated id.
impl FlatRecord for Substance {
    type Patch = SubstancePatch;

    const FIELDS: &'static [&'static str] = &["name"];

    const AUTO_ID: bool = false;

    fn id(&self) -> &str {
        &self.name
    }

    fn set_id(&mut self, id: String) {
        self.name = id;
    }

    fn to_row(&self) -> Row {
        vec![self.name.clone()]
    }

    fn from_row(fields: &FieldMap, row: &[String]) -> Self {
        Substance {
            name: fields.cell(row, "name").to_string(),
        }
    }

    fn merge(&self, patch: SubstancePatch) -> Self {
        self.merged(patch)
    }
}

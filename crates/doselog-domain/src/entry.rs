//! The observation entry record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::factor::EnvFactor;
use crate::substance::SubstanceKind;

/// One observation event: a substance taken and what followed.
///
/// `id` is an opaque unique string; the empty string means "not yet
/// assigned" and the store fills it in on create. Severity is kept as
/// text, the way it is stored; [`Entry::severity`] gives the parsed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    pub entry_date: NaiveDate,
    pub entry_time: NaiveTime,
    #[serde(rename = "substanceType")]
    pub substance_kind: SubstanceKind,
    pub substance_name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub post_dose_symptoms: Vec<String>,
    #[serde(default)]
    pub symptom_severity: String,
    #[serde(default)]
    pub environmental_factors: Vec<EnvFactor>,
    #[serde(default)]
    pub remarks: String,
}

impl Entry {
    /// The event timestamp: date and time combined.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.entry_date.and_time(self.entry_time)
    }

    /// Severity parsed from the stored text. Parsing reads the leading
    /// integer, so a cell with trailing junk (`"4 (mild)"`) still
    /// contributes `4`; `None` when the text does not start with a
    /// number.
    pub fn severity(&self) -> Option<i32> {
        let text = self.symptom_severity.trim();
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let digits = unsigned.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let sign = text.len() - unsigned.len();
        text[..sign + digits].parse().ok()
    }

    /// Overlay supplied patch fields on this entry. The patch id is
    /// ignored; identity is controlled by the store.
    pub fn merged(&self, patch: EntryPatch) -> Entry {
        Entry {
            id: self.id.clone(),
            entry_date: patch.entry_date.unwrap_or(self.entry_date),
            entry_time: patch.entry_time.unwrap_or(self.entry_time),
            substance_kind: patch.substance_kind.unwrap_or(self.substance_kind),
            substance_name: patch
                .substance_name
                .unwrap_or_else(|| self.substance_name.clone()),
            amount: patch.amount.unwrap_or_else(|| self.amount.clone()),
            post_dose_symptoms: patch
                .post_dose_symptoms
                .unwrap_or_else(|| self.post_dose_symptoms.clone()),
            symptom_severity: patch
                .symptom_severity
                .unwrap_or_else(|| self.symptom_severity.clone()),
            environmental_factors: patch
                .environmental_factors
                .unwrap_or_else(|| self.environmental_factors.clone()),
            remarks: patch.remarks.unwrap_or_else(|| self.remarks.clone()),
        }
    }

    /// Copy of this entry re-dated to `date`/`time` with the id cleared,
    /// ready to be created as a fresh observation.
    pub fn duplicate_at(&self, date: NaiveDate, time: NaiveTime) -> Entry {
        Entry {
            id: String::new(),
            entry_date: date,
            entry_time: time,
            ..self.clone()
        }
    }
}

/// Partial update for an entry. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryPatch {
    pub id: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub entry_time: Option<NaiveTime>,
    #[serde(rename = "substanceType")]
    pub substance_kind: Option<SubstanceKind>,
    pub substance_name: Option<String>,
    pub amount: Option<String>,
    pub post_dose_symptoms: Option<Vec<String>>,
    pub symptom_severity: Option<String>,
    pub environmental_factors: Option<Vec<EnvFactor>>,
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        Entry {
            id: "e-1".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            entry_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            substance_kind: SubstanceKind::Food,
            substance_name: "Peanuts".to_string(),
            amount: "a handful".to_string(),
            post_dose_symptoms: vec!["Hives".to_string()],
            symptom_severity: "4".to_string(),
            environmental_factors: vec![EnvFactor::label("Poor Sleep")],
            remarks: String::new(),
        }
    }

    #[test]
    fn timestamp_combines_date_and_time() {
        let entry = sample();
        assert_eq!(
            entry.timestamp(),
            NaiveDate::from_ymd_opt(2024, 3, 14)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn severity_parses_or_none() {
        let mut entry = sample();
        assert_eq!(entry.severity(), Some(4));
        entry.symptom_severity = "abc".to_string();
        assert_eq!(entry.severity(), None);
        entry.symptom_severity = " 7 ".to_string();
        assert_eq!(entry.severity(), Some(7));
        entry.symptom_severity = String::new();
        assert_eq!(entry.severity(), None);
    }

    #[test]
    fn severity_reads_leading_digits_past_trailing_text() {
        let mut entry = sample();
        entry.symptom_severity = "4 (mild)".to_string();
        assert_eq!(entry.severity(), Some(4));
        entry.symptom_severity = "7ish".to_string();
        assert_eq!(entry.severity(), Some(7));
        entry.symptom_severity = "-2".to_string();
        assert_eq!(entry.severity(), Some(-2));
        entry.symptom_severity = "+3".to_string();
        assert_eq!(entry.severity(), Some(3));
        entry.symptom_severity = "-".to_string();
        assert_eq!(entry.severity(), None);
    }

    #[test]
    fn merged_overlays_supplied_fields_only() {
        let entry = sample();
        let merged = entry.merged(EntryPatch {
            symptom_severity: Some("7".to_string()),
            ..EntryPatch::default()
        });
        assert_eq!(merged.symptom_severity, "7");
        assert_eq!(merged.substance_name, "Peanuts");
        assert_eq!(merged.post_dose_symptoms, vec!["Hives".to_string()]);
    }

    #[test]
    fn merged_ignores_patch_id() {
        let entry = sample();
        let merged = entry.merged(EntryPatch {
            id: Some("hijack".to_string()),
            ..EntryPatch::default()
        });
        assert_eq!(merged.id, "e-1");
    }

    #[test]
    fn duplicate_clears_id_and_redates() {
        let entry = sample();
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let time = NaiveTime::from_hms_opt(20, 15, 0).unwrap();
        let copy = entry.duplicate_at(date, time);
        assert!(copy.id.is_empty());
        assert_eq!(copy.entry_date, date);
        assert_eq!(copy.entry_time, time);
        assert_eq!(copy.substance_name, entry.substance_name);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("entryDate").is_some());
        assert!(json.get("substanceType").is_some());
        assert!(json.get("postDoseSymptoms").is_some());
        assert_eq!(json["substanceType"], "food");
    }

    #[test]
    fn patch_deserializes_partial_bodies() {
        let patch: EntryPatch =
            serde_json::from_str(r#"{"symptomSeverity":"7"}"#).unwrap();
        assert_eq!(patch.symptom_severity.as_deref(), Some("7"));
        assert!(patch.entry_date.is_none());
    }
}

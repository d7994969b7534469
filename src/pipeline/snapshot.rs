use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::MigrationError;

/// Point-in-time export of the source store, one ordered collection per
/// entity type. Read-only for the duration of a run.
///
/// Fields arrive loose (ids as strings, enums as free text, numerics
/// optional) so that drifted source data loads instead of failing at parse
/// time; the validator and repair engine deal with it record by record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub departments: Vec<RawDepartment>,
    pub doctors: Vec<RawDoctor>,
    pub patients: Vec<RawPatient>,
    pub beds: Vec<RawBed>,
    pub transactions: Vec<RawTransaction>,
}

impl Snapshot {
    /// Read and parse a snapshot artifact. Any I/O or parse failure is a
    /// pre-run fatal error — nothing has been written yet.
    pub fn load(path: &Path) -> Result<Snapshot, MigrationError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MigrationError::SnapshotUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        serde_json::from_str(&text).map_err(|e| MigrationError::SnapshotUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Snapshot, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn total_records(&self) -> usize {
        self.departments.len()
            + self.doctors.len()
            + self.patients.len()
            + self.beds.len()
            + self.transactions.len()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDepartment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDoctor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub fee: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPatient {
    pub id: Option<String>,
    pub patient_code: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub medical_history: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBed {
    pub bed_number: Option<String>,
    pub department: Option<String>,
    pub room_type: Option<String>,
    pub status: Option<String>,
    pub patient_id: Option<String>,
    pub daily_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub id: Option<String>,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub transaction_type: Option<String>,
    pub payment_mode: Option<String>,
    pub amount: Option<f64>,
    pub department: Option<String>,
    pub transaction_date: Option<String>,
}

impl RawTransaction {
    /// The export formats in the wild carry either a bare date or a full
    /// RFC 3339 timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.transaction_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| chrono::DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}

/// Trimmed, non-empty view of an optional source string.
pub(crate) fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::Defect;
use super::{EntityKind, MigrationError};

/// Reconciliation counters for one entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityCounters {
    pub source: u64,
    pub already_present: u64,
    /// Total newly written this run, repaired or not.
    pub imported: u64,
    /// Subset of `imported` that needed a repair pass.
    pub repaired: u64,
    pub rejected: u64,
    pub complete: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rejection_reasons: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub repairs: BTreeMap<String, u64>,
}

impl EntityCounters {
    pub fn is_complete(&self) -> bool {
        self.already_present + self.imported == self.source
    }

    pub(crate) fn note_rejected(&mut self, defects: &[Defect]) {
        self.rejected += 1;
        for defect in defects.iter().filter(|d| d.rejects()) {
            *self.rejection_reasons.entry(defect.label()).or_default() += 1;
        }
    }

    pub(crate) fn note_rejected_reason(&mut self, reason: &str) {
        self.rejected += 1;
        *self.rejection_reasons.entry(reason.to_string()).or_default() += 1;
    }

    pub(crate) fn note_repairs(&mut self, defects: &[Defect]) {
        self.repaired += 1;
        for defect in defects {
            *self.repairs.entry(defect.label()).or_default() += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    pub entity: String,
    #[serde(flatten)]
    pub counters: EntityCounters,
}

/// The audit summary for one run. Serialized to JSON for the operator and
/// into the target store's `migration_runs` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub run_id: Uuid,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub dry_run: bool,
    /// AND of every entity's `complete` flag; false when the run aborted.
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_error: Option<String>,
    pub entities: Vec<EntityReport>,
}

impl MigrationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: chrono::Local::now().naive_local(),
            finished_at: None,
            dry_run,
            complete: false,
            fatal_error: None,
            entities: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: EntityKind, counters: EntityCounters) {
        self.entities.push(EntityReport { entity: kind.as_str().to_string(), counters });
    }

    /// Freeze the per-entity and overall verdicts.
    pub fn finish(&mut self) {
        for entry in &mut self.entities {
            entry.counters.complete = entry.counters.is_complete();
        }
        self.complete =
            self.fatal_error.is_none() && self.entities.iter().all(|e| e.counters.complete);
        self.finished_at = Some(chrono::Local::now().naive_local());
    }

    pub fn counters(&self, kind: EntityKind) -> Option<&EntityCounters> {
        self.entities
            .iter()
            .find(|e| e.entity == kind.as_str())
            .map(|e| &e.counters)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Emit the report to the given path, or stdout when none was requested.
pub fn write_report(report: &MigrationReport, path: Option<&Path>) -> Result<(), MigrationError> {
    let json = report.to_json()?;
    match path {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => println!("{json}"),
    }
    Ok(())
}

/// One summary line per entity type, for operators following the log.
pub fn log_summary(report: &MigrationReport) {
    for entry in &report.entities {
        tracing::info!(
            entity = %entry.entity,
            source = entry.counters.source,
            already_present = entry.counters.already_present,
            imported = entry.counters.imported,
            repaired = entry.counters.repaired,
            rejected = entry.counters.rejected,
            complete = entry.counters.complete,
            "Reconciliation"
        );
    }
    if let Some(reason) = &report.fatal_error {
        tracing::error!(%reason, "Run aborted before all entity types completed");
    }
    tracing::info!(run_id = %report.run_id, complete = report.complete, "Migration finished");
}

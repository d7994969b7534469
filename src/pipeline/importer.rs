use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::models::{Bed, Department, Doctor, Patient, Transaction};

use super::registry::ReferenceRegistry;
use super::repair;
use super::report::{EntityCounters, MigrationReport};
use super::snapshot::{
    trimmed, RawBed, RawDepartment, RawDoctor, RawPatient, RawTransaction, Snapshot,
};
use super::validate::{self, Defect, ValidationResult, Verdict};
use super::{EntityKind, MigrationError};

/// Drives one migration run: for each entity type in dependency order, pulls
/// records from the snapshot, skips ones the registry already knows, validates
/// and repairs the rest, and writes accepted records to the target store.
///
/// Owns the store connection for the duration of the run. Strictly
/// sequential — later records must see earlier writes through the registry.
pub struct Importer<'a> {
    conn: &'a Connection,
    registry: ReferenceRegistry,
    dry_run: bool,
    today: NaiveDate,
}

impl<'a> Importer<'a> {
    /// Seeds the registry from the target store's current contents.
    pub fn new(conn: &'a Connection, dry_run: bool) -> Result<Self, MigrationError> {
        let registry = ReferenceRegistry::seed_from_store(conn)?;
        Ok(Self {
            conn,
            registry,
            dry_run,
            today: chrono::Local::now().date_naive(),
        })
    }

    pub fn run(mut self, snapshot: &Snapshot) -> Result<MigrationReport, MigrationError> {
        let mut report = MigrationReport::new(self.dry_run);

        for kind in EntityKind::IMPORT_ORDER {
            let mut counters = EntityCounters::default();
            let outcome = match kind {
                EntityKind::Department => {
                    self.import_collection(&snapshot.departments, &mut counters)
                }
                EntityKind::Doctor => self.import_collection(&snapshot.doctors, &mut counters),
                EntityKind::Patient => self.import_collection(&snapshot.patients, &mut counters),
                EntityKind::Bed => self.import_collection(&snapshot.beds, &mut counters),
                EntityKind::Transaction => {
                    self.import_collection(&snapshot.transactions, &mut counters)
                }
            };
            report.push(kind, counters);

            match outcome {
                Ok(()) => {}
                Err(MigrationError::FatalStore(e)) => {
                    tracing::error!(
                        entity = kind.as_str(),
                        error = %e,
                        "Fatal store error — aborting run, completed entity types stay committed"
                    );
                    report.fatal_error = Some(e.to_string());
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        report.finish();
        Ok(report)
    }

    fn import_collection<R: ImportRecord>(
        &mut self,
        records: &[R],
        counters: &mut EntityCounters,
    ) -> Result<(), MigrationError> {
        counters.source = records.len() as u64;

        for record in records {
            self.import_record(record, counters)?;
        }

        tracing::info!(
            entity = R::KIND.as_str(),
            source = counters.source,
            imported = counters.imported,
            already_present = counters.already_present,
            rejected = counters.rejected,
            "Entity pass complete"
        );
        Ok(())
    }

    fn import_record<R: ImportRecord>(
        &mut self,
        record: &R,
        counters: &mut EntityCounters,
    ) -> Result<(), MigrationError> {
        if let Some(id) = record.source_id() {
            if self.registry.contains(R::KIND, &id) {
                counters.already_present += 1;
                return Ok(());
            }
        }

        let first = record.validate(&self.registry);
        match first.verdict {
            Verdict::Valid => self.write_record(record, &[], counters),
            Verdict::Repairable => {
                let repaired = record.repair(&first.defects, self.today);
                let second = repaired.validate(&self.registry);
                if second.verdict == Verdict::Valid {
                    self.write_record(&repaired, &first.defects, counters)
                } else {
                    // One repair pass only — never loop, never retry.
                    tracing::warn!(
                        entity = R::KIND.as_str(),
                        id = record.source_id().as_deref().unwrap_or("?"),
                        defects = ?second.defects,
                        "Record still invalid after repair"
                    );
                    counters.note_rejected_reason("invalid_after_repair");
                    Ok(())
                }
            }
            Verdict::Rejected => {
                tracing::warn!(
                    entity = R::KIND.as_str(),
                    id = record.source_id().as_deref().unwrap_or("?"),
                    defects = ?first.defects,
                    "Record rejected"
                );
                counters.note_rejected(&first.defects);
                Ok(())
            }
        }
    }

    fn write_record<R: ImportRecord>(
        &mut self,
        record: &R,
        repairs: &[Defect],
        counters: &mut EntityCounters,
    ) -> Result<(), MigrationError> {
        let Some(model) = record.finalize() else {
            counters.note_rejected_reason("constraint_violation");
            return Ok(());
        };

        if !self.dry_run {
            if let Err(e) = R::write(self.conn, &model) {
                if e.is_constraint_violation() {
                    // Schema drift backstop: local validation passed but the
                    // store refused the row. Per-record failure, run continues.
                    tracing::warn!(
                        entity = R::KIND.as_str(),
                        id = record.source_id().as_deref().unwrap_or("?"),
                        error = %e,
                        "Target store refused record"
                    );
                    counters.note_rejected_reason("constraint_violation");
                    return Ok(());
                }
                return Err(MigrationError::FatalStore(e));
            }
        }

        if let Some(id) = record.source_id() {
            self.registry.register(R::KIND, id);
        }
        counters.imported += 1;
        if !repairs.is_empty() {
            counters.note_repairs(repairs);
        }
        Ok(())
    }
}

/// Per-entity plumbing the generic import loop needs: identity, validation,
/// repair, and the concrete write. One impl per snapshot record type replaces
/// the per-entity copies of this pipeline the legacy scripts carried.
trait ImportRecord: Clone {
    type Model;
    const KIND: EntityKind;

    fn source_id(&self) -> Option<String>;
    fn validate(&self, registry: &ReferenceRegistry) -> ValidationResult;
    fn repair(&self, defects: &[Defect], today: NaiveDate) -> Self;
    /// Raw → canonical conversion; `None` only if a guarantee from `validate`
    /// does not hold (treated as a constraint violation, not a panic).
    fn finalize(&self) -> Option<Self::Model>;
    fn write(conn: &Connection, model: &Self::Model) -> Result<(), DatabaseError>;
}

fn valid_money(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

impl ImportRecord for RawDepartment {
    type Model = Department;
    const KIND: EntityKind = EntityKind::Department;

    fn source_id(&self) -> Option<String> {
        trimmed(&self.id).map(String::from)
    }

    fn validate(&self, _registry: &ReferenceRegistry) -> ValidationResult {
        validate::validate_department(self)
    }

    fn repair(&self, _defects: &[Defect], _today: NaiveDate) -> Self {
        // Departments have no repairable rules; rejects stay rejects.
        self.clone()
    }

    fn finalize(&self) -> Option<Department> {
        Some(Department {
            id: trimmed(&self.id)?.to_string(),
            name: trimmed(&self.name)?.to_string(),
            description: self.description.clone(),
        })
    }

    fn write(conn: &Connection, model: &Department) -> Result<(), DatabaseError> {
        db::insert_department(conn, model)
    }
}

impl ImportRecord for RawDoctor {
    type Model = Doctor;
    const KIND: EntityKind = EntityKind::Doctor;

    fn source_id(&self) -> Option<String> {
        trimmed(&self.id).map(String::from)
    }

    fn validate(&self, _registry: &ReferenceRegistry) -> ValidationResult {
        validate::validate_doctor(self)
    }

    fn repair(&self, defects: &[Defect], _today: NaiveDate) -> Self {
        repair::repair_doctor(self, defects)
    }

    fn finalize(&self) -> Option<Doctor> {
        Some(Doctor {
            id: trimmed(&self.id)?.to_string(),
            name: trimmed(&self.name)?.to_string(),
            department: trimmed(&self.department)?.to_string(),
            specialization: self.specialization.clone(),
            fee: valid_money(self.fee)?,
            phone: self.phone.clone(),
            email: self.email.clone(),
            active: self.active.unwrap_or(true),
        })
    }

    fn write(conn: &Connection, model: &Doctor) -> Result<(), DatabaseError> {
        db::insert_doctor(conn, model)
    }
}

impl ImportRecord for RawPatient {
    type Model = Patient;
    const KIND: EntityKind = EntityKind::Patient;

    fn source_id(&self) -> Option<String> {
        trimmed(&self.id).map(String::from)
    }

    fn validate(&self, _registry: &ReferenceRegistry) -> ValidationResult {
        validate::validate_patient(self)
    }

    fn repair(&self, defects: &[Defect], _today: NaiveDate) -> Self {
        repair::repair_patient(self, defects)
    }

    fn finalize(&self) -> Option<Patient> {
        Some(Patient {
            id: trimmed(&self.id)?.to_string(),
            patient_code: trimmed(&self.patient_code)?.to_string(),
            name: trimmed(&self.name)?.to_string(),
            age: self.age?,
            gender: self.gender.as_deref()?.parse().ok()?,
            phone: self.phone.clone(),
            address: self.address.clone(),
            medical_history: self.medical_history.clone(),
            active: self.active.unwrap_or(true),
        })
    }

    fn write(conn: &Connection, model: &Patient) -> Result<(), DatabaseError> {
        db::insert_patient(conn, model)
    }
}

impl ImportRecord for RawBed {
    type Model = Bed;
    const KIND: EntityKind = EntityKind::Bed;

    fn source_id(&self) -> Option<String> {
        trimmed(&self.bed_number).map(String::from)
    }

    fn validate(&self, registry: &ReferenceRegistry) -> ValidationResult {
        validate::validate_bed(self, registry)
    }

    fn repair(&self, defects: &[Defect], _today: NaiveDate) -> Self {
        repair::repair_bed(self, defects)
    }

    fn finalize(&self) -> Option<Bed> {
        Some(Bed {
            bed_number: trimmed(&self.bed_number)?.to_string(),
            department: trimmed(&self.department)?.to_string(),
            room_type: self.room_type.as_deref()?.parse().ok()?,
            status: self.status.as_deref()?.parse().ok()?,
            patient_id: trimmed(&self.patient_id).map(String::from),
            daily_rate: valid_money(self.daily_rate)?,
        })
    }

    fn write(conn: &Connection, model: &Bed) -> Result<(), DatabaseError> {
        db::insert_bed(conn, model)
    }
}

impl ImportRecord for RawTransaction {
    type Model = Transaction;
    const KIND: EntityKind = EntityKind::Transaction;

    fn source_id(&self) -> Option<String> {
        trimmed(&self.id).map(String::from)
    }

    fn validate(&self, registry: &ReferenceRegistry) -> ValidationResult {
        validate::validate_transaction(self, registry)
    }

    fn repair(&self, defects: &[Defect], today: NaiveDate) -> Self {
        repair::repair_transaction(self, defects, today)
    }

    fn finalize(&self) -> Option<Transaction> {
        Some(Transaction {
            id: trimmed(&self.id)?.to_string(),
            patient_id: trimmed(&self.patient_id)?.to_string(),
            doctor_id: trimmed(&self.doctor_id).map(String::from),
            transaction_type: self.transaction_type.as_deref()?.parse().ok()?,
            payment_mode: self.payment_mode.as_deref()?.parse().ok()?,
            amount: valid_money(self.amount)?,
            department: self.department.clone(),
            transaction_date: self.parsed_date()?,
        })
    }

    fn write(conn: &Connection, model: &Transaction) -> Result<(), DatabaseError> {
        db::insert_transaction(conn, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::db::sqlite::open_memory_database;
    use crate::models::enums::*;

    fn run_json(conn: &Connection, json: &str) -> MigrationReport {
        let snapshot = Snapshot::from_json(json).unwrap();
        Importer::new(conn, false).unwrap().run(&snapshot).unwrap()
    }

    const THREE_PATIENTS: &str = r#"
        {"id": "p1", "patient_code": "PAT-1", "name": "Asha", "age": 34, "gender": "female"},
        {"id": "p2", "patient_code": "PAT-2", "name": "Ravi", "age": 61, "gender": "male"},
        {"id": "p3", "patient_code": "PAT-3", "name": "Meena", "age": 7, "gender": "female"}
    "#;

    #[test]
    fn unknown_patient_rejected_known_patient_imported() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            &format!(
                r#"{{
                    "patients": [{THREE_PATIENTS}],
                    "transactions": [
                        {{"id": "t1", "patient_id": "p2", "transaction_type": "consultation",
                          "payment_mode": "cash", "amount": 500, "transaction_date": "2025-11-04"}},
                        {{"id": "t2", "patient_id": "p9", "transaction_type": "consultation",
                          "payment_mode": "cash", "amount": 250, "transaction_date": "2025-11-04"}}
                    ]
                }}"#
            ),
        );

        let patients = report.counters(EntityKind::Patient).unwrap();
        assert_eq!(patients.imported, 3);
        assert!(patients.complete);

        let txns = report.counters(EntityKind::Transaction).unwrap();
        assert_eq!(txns.source, 2);
        assert_eq!(txns.imported, 1);
        assert_eq!(txns.rejected, 1);
        assert_eq!(txns.rejection_reasons["unresolvable_reference:patient_id"], 1);
        assert!(!txns.complete);
        assert!(!report.complete);

        // The rejected transaction must not exist in any form — not even with
        // a nulled patient reference.
        assert_eq!(db::count_transactions(&conn).unwrap(), 1);
        assert!(db::get_transaction(&conn, "t2").unwrap().is_none());
    }

    #[test]
    fn transaction_may_reference_patient_later_in_snapshot() {
        let conn = open_memory_database().unwrap();
        // p3 is the last patient in source order; patients are fully imported
        // before the transaction pass starts.
        let report = run_json(
            &conn,
            &format!(
                r#"{{
                    "patients": [{THREE_PATIENTS}],
                    "transactions": [
                        {{"id": "t1", "patient_id": "p3", "transaction_type": "entry_fee",
                          "payment_mode": "upi", "amount": 50, "transaction_date": "2025-11-04"}}
                    ]
                }}"#
            ),
        );

        assert!(report.complete);
        let txn = db::get_transaction(&conn, "t1").unwrap().unwrap();
        assert_eq!(txn.patient_id, "p3");
    }

    #[test]
    fn second_run_is_a_noop() {
        let conn = open_memory_database().unwrap();
        let json = format!(
            r#"{{
                "doctors": [{{"id": "d1", "name": "Dr. Rao", "department": "Cardiology", "fee": 600}}],
                "patients": [{THREE_PATIENTS}],
                "beds": [{{"bed_number": "B-1", "department": "General Ward",
                           "room_type": "general", "status": "available", "daily_rate": 800}}],
                "transactions": [
                    {{"id": "t1", "patient_id": "p1", "doctor_id": "d1",
                      "transaction_type": "consultation", "payment_mode": "card",
                      "amount": 600, "transaction_date": "2025-11-04"}}
                ]
            }}"#
        );

        let first = run_json(&conn, &json);
        assert!(first.complete);

        let second = run_json(&conn, &json);
        assert!(second.complete);
        for entry in &second.entities {
            assert_eq!(entry.counters.imported, 0, "{}", entry.entity);
            assert_eq!(entry.counters.already_present, entry.counters.source);
        }

        assert_eq!(db::count_patients(&conn).unwrap(), 3);
        assert_eq!(db::count_transactions(&conn).unwrap(), 1);
        assert_eq!(db::count_beds(&conn).unwrap(), 1);
    }

    #[test]
    fn unknown_doctor_reference_is_nullified_not_rejected() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            &format!(
                r#"{{
                    "patients": [{THREE_PATIENTS}],
                    "transactions": [
                        {{"id": "t1", "patient_id": "p1", "doctor_id": "ghost",
                          "transaction_type": "consultation", "payment_mode": "cash",
                          "amount": 500, "transaction_date": "2025-11-04"}}
                    ]
                }}"#
            ),
        );

        let txns = report.counters(EntityKind::Transaction).unwrap();
        assert_eq!(txns.imported, 1);
        assert_eq!(txns.repaired, 1);
        assert_eq!(txns.repairs["reference_nullified:doctor_id"], 1);

        let txn = db::get_transaction(&conn, "t1").unwrap().unwrap();
        assert_eq!(txn.doctor_id, None);
        assert_eq!(txn.patient_id, "p1");
    }

    #[test]
    fn wrong_case_bed_status_normalized_and_counted() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            &format!(
                r#"{{
                    "patients": [{THREE_PATIENTS}],
                    "beds": [
                        {{"bed_number": "B-1", "department": "General Ward",
                          "room_type": "general", "status": "Occupied",
                          "patient_id": "p1", "daily_rate": 800}}
                    ]
                }}"#
            ),
        );

        let beds = report.counters(EntityKind::Bed).unwrap();
        assert_eq!(beds.imported, 1);
        assert_eq!(beds.repaired, 1);
        assert_eq!(beds.repairs["enum_coerced:status"], 1);
        assert!(beds.complete);

        let bed = db::get_bed(&conn, "B-1").unwrap().unwrap();
        assert_eq!(bed.status, BedStatus::Occupied);
        assert_eq!(bed.patient_id.as_deref(), Some("p1"));
    }

    #[test]
    fn blank_doctor_department_gets_documented_fallback() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            r#"{"doctors": [{"id": "d1", "name": "Dr. Rao", "department": "", "fee": 400}]}"#,
        );

        let doctors = report.counters(EntityKind::Doctor).unwrap();
        assert_eq!(doctors.imported, 1);
        assert_eq!(doctors.repaired, 1);
        assert_eq!(doctors.repairs["default_applied:department"], 1);

        let doctor = db::get_doctor(&conn, "d1").unwrap().unwrap();
        assert_eq!(doctor.department, config::DEFAULT_DEPARTMENT);
    }

    #[test]
    fn out_of_range_ages_clamped_for_all_imported_patients() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            r#"{"patients": [
                {"id": "p1", "patient_code": "PAT-1", "name": "Old", "age": 999, "gender": "male"},
                {"id": "p2", "patient_code": "PAT-2", "name": "Unknown", "gender": "F"}
            ]}"#,
        );

        let patients = report.counters(EntityKind::Patient).unwrap();
        assert_eq!(patients.imported, 2);
        assert_eq!(patients.repaired, 2);
        assert_eq!(patients.repairs["range_clamped:age"], 2);

        for patient in db::get_all_patients(&conn).unwrap() {
            assert!((0..=120).contains(&patient.age), "age {} escaped", patient.age);
        }
        assert_eq!(db::get_patient(&conn, "p1").unwrap().unwrap().age, 120);
        assert_eq!(
            db::get_patient(&conn, "p2").unwrap().unwrap().age,
            config::DEFAULT_PATIENT_AGE
        );
        assert_eq!(db::get_patient(&conn, "p2").unwrap().unwrap().gender, Gender::Female);
    }

    #[test]
    fn unmapped_enums_fall_back_to_documented_defaults() {
        let conn = open_memory_database().unwrap();
        run_json(
            &conn,
            &format!(
                r#"{{
                    "patients": [{THREE_PATIENTS}],
                    "beds": [
                        {{"bed_number": "B-1", "department": "Ward", "room_type": "penthouse",
                          "status": "???", "daily_rate": 100}}
                    ],
                    "transactions": [
                        {{"id": "t1", "patient_id": "p1", "transaction_type": "mystery",
                          "payment_mode": "barter", "amount": 10, "transaction_date": "2025-11-04"}}
                    ]
                }}"#
            ),
        );

        let bed = db::get_bed(&conn, "B-1").unwrap().unwrap();
        assert_eq!(bed.room_type, RoomType::General);
        assert_eq!(bed.status, BedStatus::Available);

        let txn = db::get_transaction(&conn, "t1").unwrap().unwrap();
        assert_eq!(txn.transaction_type, TransactionType::Consultation);
        assert_eq!(txn.payment_mode, PaymentMode::Cash);
    }

    #[test]
    fn preseeded_target_rows_are_skipped_not_duplicated() {
        let conn = open_memory_database().unwrap();
        db::insert_patient(
            &conn,
            &crate::models::Patient {
                id: "p1".into(),
                patient_code: "PAT-1".into(),
                name: "Asha".into(),
                age: 34,
                gender: Gender::Female,
                phone: None,
                address: None,
                medical_history: None,
                active: true,
            },
        )
        .unwrap();

        let report = run_json(
            &conn,
            r#"{"patients": [
                {"id": "p1", "patient_code": "PAT-1", "name": "Asha", "age": 34, "gender": "female"},
                {"id": "p2", "patient_code": "PAT-2", "name": "Ravi", "age": 61, "gender": "male"}
            ]}"#,
        );

        let patients = report.counters(EntityKind::Patient).unwrap();
        assert_eq!(patients.already_present, 1);
        assert_eq!(patients.imported, 1);
        assert!(patients.complete);
        assert_eq!(db::count_patients(&conn).unwrap(), 2);
    }

    #[test]
    fn store_constraint_backstop_rejects_record_and_run_continues() {
        let conn = open_memory_database().unwrap();
        // Same patient_code under two ids: local rules pass, UNIQUE refuses
        // the second row at write time.
        let report = run_json(
            &conn,
            r#"{"patients": [
                {"id": "p1", "patient_code": "PAT-1", "name": "Asha", "age": 34, "gender": "female"},
                {"id": "p2", "patient_code": "PAT-1", "name": "Ravi", "age": 61, "gender": "male"},
                {"id": "p3", "patient_code": "PAT-3", "name": "Meena", "age": 7, "gender": "female"}
            ]}"#,
        );

        let patients = report.counters(EntityKind::Patient).unwrap();
        assert_eq!(patients.imported, 2);
        assert_eq!(patients.rejected, 1);
        assert_eq!(patients.rejection_reasons["constraint_violation"], 1);
        assert!(!patients.complete);
        assert_eq!(db::count_patients(&conn).unwrap(), 2);
    }

    #[test]
    fn missing_required_fields_reject_with_reasons() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            r#"{"patients": [{"id": "p1", "name": "No Code", "age": 30, "gender": "male"}],
                "transactions": [{"id": "t1", "transaction_type": "consultation",
                                  "payment_mode": "cash", "amount": 5,
                                  "transaction_date": "2025-11-04"}]}"#,
        );

        let patients = report.counters(EntityKind::Patient).unwrap();
        assert_eq!(patients.rejected, 1);
        assert_eq!(patients.rejection_reasons["missing_required:patient_code"], 1);

        let txns = report.counters(EntityKind::Transaction).unwrap();
        assert_eq!(txns.rejected, 1);
        assert_eq!(txns.rejection_reasons["missing_required:patient_id"], 1);
    }

    #[test]
    fn dry_run_classifies_without_writing() {
        let conn = open_memory_database().unwrap();
        let snapshot = Snapshot::from_json(&format!(
            r#"{{
                "patients": [{THREE_PATIENTS}],
                "transactions": [
                    {{"id": "t1", "patient_id": "p1", "transaction_type": "consultation",
                      "payment_mode": "cash", "amount": 500, "transaction_date": "2025-11-04"}}
                ]
            }}"#
        ))
        .unwrap();

        let report = Importer::new(&conn, true).unwrap().run(&snapshot).unwrap();

        assert!(report.dry_run);
        assert!(report.complete);
        // Intra-run references still resolve: the transaction saw p1 through
        // the registry even though nothing reached the store.
        assert_eq!(report.counters(EntityKind::Transaction).unwrap().imported, 1);
        assert_eq!(db::count_patients(&conn).unwrap(), 0);
        assert_eq!(db::count_transactions(&conn).unwrap(), 0);
    }

    #[test]
    fn empty_snapshot_completes_trivially() {
        let conn = open_memory_database().unwrap();
        let report = run_json(&conn, "{}");
        assert!(report.complete);
        assert_eq!(report.entities.len(), 5);
        for entry in &report.entities {
            assert_eq!(entry.counters.source, 0);
            assert!(entry.counters.complete);
        }
    }

    #[test]
    fn departments_import_before_everything_else() {
        let conn = open_memory_database().unwrap();
        let report = run_json(
            &conn,
            r#"{"departments": [{"id": "dep1", "name": "Radiology"}],
                "doctors": [{"id": "d1", "name": "Dr. Rao", "department": "Radiology", "fee": 700}]}"#,
        );

        assert!(report.complete);
        assert_eq!(report.entities[0].entity, "departments");
        assert_eq!(db::count_departments(&conn).unwrap(), 1);
        assert_eq!(db::count_doctors(&conn).unwrap(), 1);
    }
}

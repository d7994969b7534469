use crate::config;
use crate::models::enums::{BedStatus, Gender, PaymentMode, RoomType, TransactionType};

use super::normalize::{is_canonical, CanonicalEnum};
use super::registry::ReferenceRegistry;
use super::snapshot::{trimmed, RawBed, RawDepartment, RawDoctor, RawPatient, RawTransaction};
use super::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Repairable,
    Rejected,
}

/// One rule violation found on a record. Rejecting defects trump repairable
/// ones when the verdict is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// Required field absent with no safe default.
    MissingRequired { field: &'static str },
    /// FK target missing and the schema requires the reference.
    UnresolvableRequiredRef { field: &'static str, id: String },
    /// FK target missing but the schema tolerates null — repair nullifies.
    UnresolvableNullableRef { field: &'static str, id: String },
    /// Enum value not the exact canonical spelling — repair normalizes.
    EnumOutsideWhitelist { field: &'static str },
    /// Ranged numeric missing or outside bounds — repair clamps or defaults.
    OutOfRange { field: &'static str },
    /// Optional-with-default field blank — repair fills the documented default.
    MissingDefaultable { field: &'static str },
}

impl Defect {
    pub fn rejects(&self) -> bool {
        matches!(
            self,
            Defect::MissingRequired { .. } | Defect::UnresolvableRequiredRef { .. }
        )
    }

    /// Stable label for report breakdowns.
    pub fn label(&self) -> String {
        match self {
            Defect::MissingRequired { field } => format!("missing_required:{field}"),
            Defect::UnresolvableRequiredRef { field, .. } => {
                format!("unresolvable_reference:{field}")
            }
            Defect::UnresolvableNullableRef { field, .. } => {
                format!("reference_nullified:{field}")
            }
            Defect::EnumOutsideWhitelist { field } => format!("enum_coerced:{field}"),
            Defect::OutOfRange { field } => format!("range_clamped:{field}"),
            Defect::MissingDefaultable { field } => format!("default_applied:{field}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub verdict: Verdict,
    pub defects: Vec<Defect>,
}

impl ValidationResult {
    fn from_defects(defects: Vec<Defect>) -> Self {
        let verdict = if defects.iter().any(Defect::rejects) {
            Verdict::Rejected
        } else if defects.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Repairable
        };
        Self { verdict, defects }
    }
}

/// Foreign-key rule: which registry namespace must hold the referenced id,
/// and whether the target schema tolerates null for the field.
pub struct FkSpec {
    pub field: &'static str,
    pub target: EntityKind,
    pub nullable: bool,
}

/// Transactions must stay attached to a patient; doctor attribution is
/// optional. The asymmetry is deliberate (financial integrity vs attribution).
pub const TRANSACTION_FOREIGN_KEYS: &[FkSpec] = &[
    FkSpec { field: "patient_id", target: EntityKind::Patient, nullable: false },
    FkSpec { field: "doctor_id", target: EntityKind::Doctor, nullable: true },
];

pub const BED_FOREIGN_KEYS: &[FkSpec] =
    &[FkSpec { field: "patient_id", target: EntityKind::Patient, nullable: true }];

pub fn validate_department(raw: &RawDepartment) -> ValidationResult {
    let mut defects = Vec::new();
    require(&raw.id, "id", &mut defects);
    require(&raw.name, "name", &mut defects);
    ValidationResult::from_defects(defects)
}

pub fn validate_doctor(raw: &RawDoctor) -> ValidationResult {
    let mut defects = Vec::new();
    require(&raw.id, "id", &mut defects);
    require(&raw.name, "name", &mut defects);
    if trimmed(&raw.department).is_none() {
        defects.push(Defect::MissingDefaultable { field: "department" });
    }
    check_money(raw.fee, "fee", &mut defects);
    ValidationResult::from_defects(defects)
}

pub fn validate_patient(raw: &RawPatient) -> ValidationResult {
    let mut defects = Vec::new();
    require(&raw.id, "id", &mut defects);
    require(&raw.patient_code, "patient_code", &mut defects);
    require(&raw.name, "name", &mut defects);

    match raw.age {
        Some(age) if (config::PATIENT_AGE_MIN..=config::PATIENT_AGE_MAX).contains(&age) => {}
        _ => defects.push(Defect::OutOfRange { field: "age" }),
    }
    check_enum::<Gender>(&raw.gender, &mut defects);

    ValidationResult::from_defects(defects)
}

pub fn validate_bed(raw: &RawBed, registry: &ReferenceRegistry) -> ValidationResult {
    let mut defects = Vec::new();
    require(&raw.bed_number, "bed_number", &mut defects);
    if trimmed(&raw.department).is_none() {
        defects.push(Defect::MissingDefaultable { field: "department" });
    }
    check_enum::<RoomType>(&raw.room_type, &mut defects);
    check_enum::<BedStatus>(&raw.status, &mut defects);
    for spec in BED_FOREIGN_KEYS {
        check_fk(spec, trimmed(&raw.patient_id), registry, &mut defects);
    }
    check_money(raw.daily_rate, "daily_rate", &mut defects);
    ValidationResult::from_defects(defects)
}

pub fn validate_transaction(raw: &RawTransaction, registry: &ReferenceRegistry) -> ValidationResult {
    let mut defects = Vec::new();
    require(&raw.id, "id", &mut defects);

    let fk_values = [trimmed(&raw.patient_id), trimmed(&raw.doctor_id)];
    for (spec, value) in TRANSACTION_FOREIGN_KEYS.iter().zip(fk_values) {
        check_fk(spec, value, registry, &mut defects);
    }

    check_enum::<TransactionType>(&raw.transaction_type, &mut defects);
    check_enum::<PaymentMode>(&raw.payment_mode, &mut defects);
    check_money(raw.amount, "amount", &mut defects);
    if raw.parsed_date().is_none() {
        defects.push(Defect::MissingDefaultable { field: "transaction_date" });
    }

    ValidationResult::from_defects(defects)
}

fn require(value: &Option<String>, field: &'static str, defects: &mut Vec<Defect>) {
    if trimmed(value).is_none() {
        defects.push(Defect::MissingRequired { field });
    }
}

fn check_fk(
    spec: &FkSpec,
    value: Option<&str>,
    registry: &ReferenceRegistry,
    defects: &mut Vec<Defect>,
) {
    let Some(id) = value else {
        if !spec.nullable {
            defects.push(Defect::MissingRequired { field: spec.field });
        }
        return;
    };
    if !registry.contains(spec.target, id) {
        if spec.nullable {
            defects.push(Defect::UnresolvableNullableRef { field: spec.field, id: id.into() });
        } else {
            defects.push(Defect::UnresolvableRequiredRef { field: spec.field, id: id.into() });
        }
    }
}

fn check_enum<T: CanonicalEnum>(value: &Option<String>, defects: &mut Vec<Defect>) {
    if !is_canonical::<T>(value.as_deref()) {
        defects.push(Defect::EnumOutsideWhitelist { field: T::FIELD });
    }
}

fn check_money(value: Option<f64>, field: &'static str, defects: &mut Vec<Defect>) {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => {}
        _ => defects.push(Defect::OutOfRange { field }),
    }
}

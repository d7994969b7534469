use chrono::NaiveDate;

use crate::config;
use crate::models::enums::{BedStatus, Gender, PaymentMode, RoomType, TransactionType};

use super::normalize::{normalize, CanonicalEnum};
use super::snapshot::{RawBed, RawDoctor, RawPatient, RawTransaction};
use super::validate::Defect;

// Repairs apply exactly the transformations the repairable defects name,
// touch nothing else, and are fixed points.

pub fn repair_doctor(raw: &RawDoctor, defects: &[Defect]) -> RawDoctor {
    let mut fixed = raw.clone();
    for defect in defects {
        match defect {
            Defect::MissingDefaultable { field: "department" } => {
                fixed.department = Some(config::DEFAULT_DEPARTMENT.into());
            }
            Defect::OutOfRange { field: "fee" } => {
                fixed.fee = Some(clamp_money(raw.fee));
            }
            _ => {}
        }
    }
    fixed
}

pub fn repair_patient(raw: &RawPatient, defects: &[Defect]) -> RawPatient {
    let mut fixed = raw.clone();
    for defect in defects {
        match defect {
            Defect::OutOfRange { field: "age" } => {
                fixed.age = Some(clamp_age(raw.age));
            }
            Defect::EnumOutsideWhitelist { field: "gender" } => {
                fixed.gender = Some(canonicalized::<Gender>(&raw.gender));
            }
            _ => {}
        }
    }
    fixed
}

pub fn repair_bed(raw: &RawBed, defects: &[Defect]) -> RawBed {
    let mut fixed = raw.clone();
    for defect in defects {
        match defect {
            Defect::MissingDefaultable { field: "department" } => {
                fixed.department = Some(config::DEFAULT_DEPARTMENT.into());
            }
            Defect::EnumOutsideWhitelist { field: "room_type" } => {
                fixed.room_type = Some(canonicalized::<RoomType>(&raw.room_type));
            }
            Defect::EnumOutsideWhitelist { field: "status" } => {
                fixed.status = Some(canonicalized::<BedStatus>(&raw.status));
            }
            Defect::UnresolvableNullableRef { field: "patient_id", .. } => {
                fixed.patient_id = None;
            }
            Defect::OutOfRange { field: "daily_rate" } => {
                fixed.daily_rate = Some(clamp_money(raw.daily_rate));
            }
            _ => {}
        }
    }
    fixed
}

pub fn repair_transaction(
    raw: &RawTransaction,
    defects: &[Defect],
    today: NaiveDate,
) -> RawTransaction {
    let mut fixed = raw.clone();
    for defect in defects {
        match defect {
            Defect::UnresolvableNullableRef { field: "doctor_id", .. } => {
                fixed.doctor_id = None;
            }
            Defect::EnumOutsideWhitelist { field: "transaction_type" } => {
                fixed.transaction_type = Some(canonicalized::<TransactionType>(&raw.transaction_type));
            }
            Defect::EnumOutsideWhitelist { field: "payment_mode" } => {
                fixed.payment_mode = Some(canonicalized::<PaymentMode>(&raw.payment_mode));
            }
            Defect::OutOfRange { field: "amount" } => {
                fixed.amount = Some(clamp_money(raw.amount));
            }
            Defect::MissingDefaultable { field: "transaction_date" } => {
                fixed.transaction_date = Some(today.to_string());
            }
            _ => {}
        }
    }
    fixed
}

fn canonicalized<T: CanonicalEnum>(raw: &Option<String>) -> String {
    normalize::<T>(raw.as_deref()).value.canonical().to_string()
}

fn clamp_money(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

fn clamp_age(value: Option<i64>) -> i64 {
    match value {
        Some(age) => age.clamp(config::PATIENT_AGE_MIN, config::PATIENT_AGE_MAX),
        None => config::DEFAULT_PATIENT_AGE,
    }
}

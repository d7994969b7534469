use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{PaymentMode, TransactionType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Required — a financial record must never float detached from a patient.
    pub patient_id: String,
    /// Optional attribution; nullable in both stores.
    pub doctor_id: Option<String>,
    pub transaction_type: TransactionType,
    pub payment_mode: PaymentMode,
    pub amount: f64,
    pub department: Option<String>,
    pub transaction_date: NaiveDate,
}

use serde::{Deserialize, Serialize};

use super::enums::Gender;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    /// External patient code, unique across both stores (e.g. "PAT-00042").
    pub patient_code: String,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub medical_history: Option<String>,
    pub active: bool,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    /// Free text — intentionally not a FK into departments (source stores disagree
    /// on department naming).
    pub department: String,
    pub specialization: Option<String>,
    pub fee: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

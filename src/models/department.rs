use serde::{Deserialize, Serialize};

/// Lookup table entity — no outbound foreign keys, imported first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

use serde::{Deserialize, Serialize};

use super::enums::{BedStatus, RoomType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
    /// Natural key — unique per hospital, stable across stores.
    pub bed_number: String,
    pub department: String,
    pub room_type: RoomType,
    pub status: BedStatus,
    pub patient_id: Option<String>,
    pub daily_rate: f64,
}

/// Application-level constants
pub const APP_NAME: &str = "wardsync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target store when --database is not given
pub const DEFAULT_DATABASE: &str = "hospital.db";

/// Fallback department for doctor/bed records that arrive without one
pub const DEFAULT_DEPARTMENT: &str = "General Medicine";

/// Inclusive patient age bounds, mirrored by the schema CHECK
pub const PATIENT_AGE_MIN: i64 = 0;
pub const PATIENT_AGE_MAX: i64 = 120;

/// Substitute for a missing patient age — 0 reads as "unknown" downstream
pub const DEFAULT_PATIENT_AGE: i64 = 0;

/// Log filter when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "info"
}

pub mod importer;
pub mod normalize;
pub mod registry;
pub mod repair;
pub mod report;
pub mod snapshot;
pub mod validate;

pub use importer::*;
pub use normalize::*;
pub use registry::*;
pub use repair::*;
pub use report::*;
pub use snapshot::*;
pub use validate::*;

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Snapshot unreadable: {path}: {reason}")]
    SnapshotUnreadable { path: String, reason: String },

    #[error("Fatal store error: {0}")]
    FatalStore(#[from] DatabaseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

/// The entity types the engine migrates, in no particular order.
/// `IMPORT_ORDER` is the dependency order writes must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Department,
    Doctor,
    Patient,
    Bed,
    Transaction,
}

impl EntityKind {
    /// Lookup tables first, then doctors and patients, then the types that
    /// reference them. Later passes may resolve ids written by earlier ones.
    pub const IMPORT_ORDER: [EntityKind; 5] = [
        EntityKind::Department,
        EntityKind::Doctor,
        EntityKind::Patient,
        EntityKind::Bed,
        EntityKind::Transaction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Department => "departments",
            EntityKind::Doctor => "doctors",
            EntityKind::Patient => "patients",
            EntityKind::Bed => "beds",
            EntityKind::Transaction => "transactions",
        }
    }
}

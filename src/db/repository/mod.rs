//! Repository layer — entity-scoped database operations.
//!
//! One sub-module per hospital entity plus the run audit log. All public
//! functions are re-exported here.

mod bed;
mod department;
mod doctor;
mod patient;
mod run_log;
mod transaction;

pub use bed::*;
pub use department::*;
pub use doctor::*;
pub use patient::*;
pub use run_log::*;
pub use transaction::*;

pub mod bed;
pub mod department;
pub mod doctor;
pub mod enums;
pub mod patient;
pub mod transaction;

pub use bed::*;
pub use department::*;
pub use doctor::*;
pub use patient::*;
pub use transaction::*;

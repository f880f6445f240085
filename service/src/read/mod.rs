//! Read entities definitions.

pub mod audit;
pub mod revenue;

pub use crate::domain::ledger::Occupancy;

pub use self::audit::Warning;

//! Revenue report definitions.

pub mod overview;
pub mod revenue;

pub use self::{overview::Overview, revenue::Revenue};

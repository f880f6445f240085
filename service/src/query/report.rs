//! Report [`Query`]s.
//!
//! [`Query`]: super::Query

pub mod overview;
pub mod revenue;
pub mod todays_bookings;

pub use self::{
    overview::Overview, revenue::Revenue, todays_bookings::TodaysBookings,
};

//! Domain definitions.

pub mod booking;
pub mod catalog;
pub mod floor;
pub mod ledger;
pub mod room;

pub use self::{
    booking::Booking, catalog::Catalog, floor::Floor, ledger::Ledger,
    room::Room,
};

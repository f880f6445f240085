//! [`Command`] definition.

pub mod add_floor;
pub mod add_room;
pub mod cancel_booking;
pub mod delete_floor;
pub mod delete_room;
pub mod edit_catalog;
pub mod edit_room;
pub mod renumber_floor;
pub mod submit_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_floor::AddFloor, add_room::AddRoom, cancel_booking::CancelBooking,
    delete_floor::DeleteFloor, delete_room::DeleteRoom,
    edit_catalog::EditCatalog, edit_room::EditRoom,
    renumber_floor::RenumberFloor, submit_booking::SubmitBooking,
};

//! Audit [`Warning`] definitions.

use juniper::{GraphQLObject, GraphQLUnion};
use service::read;

use crate::{api, Context};

/// Warning about inconsistent bookings data.
#[derive(Clone, Debug, GraphQLUnion)]
#[graphql(name = "AuditWarning", context = Context)]
pub enum Warning {
    /// `Booking` refers to a `Room` missing from the catalog.
    OrphanedBooking(OrphanedBooking),

    /// `Room` has more people booked than its capacity allows.
    Overbooked(Overbooked),
}

impl From<read::Warning> for Warning {
    fn from(warning: read::Warning) -> Self {
        let message = warning.to_string();
        match warning {
            read::Warning::OrphanedBooking { booking, room } => {
                Self::OrphanedBooking(OrphanedBooking {
                    booking_id: booking.into(),
                    room: room.into(),
                    message,
                })
            }
            read::Warning::Overbooked {
                room,
                capacity,
                booked,
            } => Self::Overbooked(Overbooked {
                room: room.into(),
                capacity: capacity.into(),
                booked: api::count(booked),
                message,
            }),
        }
    }
}

/// `Booking` referring to a `Room` missing from the catalog.
///
/// The `Booking` is still rendered from its own `Room` snapshot.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "OrphanedBookingWarning", context = Context)]
pub struct OrphanedBooking {
    /// ID of the orphaned `Booking`.
    pub booking_id: api::booking::Id,

    /// Name of the missing `Room`.
    pub room: api::room::Name,

    /// Human-readable description of this warning.
    pub message: String,
}

/// `Room` having more people booked than its current capacity.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "OverbookedRoomWarning", context = Context)]
pub struct Overbooked {
    /// Name of the overbooked `Room`.
    pub room: api::room::Name,

    /// Current capacity of the `Room`.
    pub capacity: i32,

    /// Number of people booked into the `Room`.
    pub booked: i32,

    /// Human-readable description of this warning.
    pub message: String,
}

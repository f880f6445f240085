//! Consistency audit of [`Booking`]s against the [`Catalog`].

use derive_more::Display;

#[cfg(doc)]
use crate::domain::Booking;
use crate::domain::{booking, room, Catalog, Ledger};

/// Advisory warning about inconsistent data.
///
/// Never fatal: the inconsistent [`Booking`]s stay in the [`Ledger`] and are
/// rendered from their own snapshots.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Warning {
    /// [`Booking`] refers to a [`Room`] missing from the [`Catalog`].
    ///
    /// [`Room`]: crate::domain::Room
    #[display(
        "`Booking(id: {booking})` refers to missing `Room(name: {room})`"
    )]
    OrphanedBooking {
        /// ID of the orphaned [`Booking`].
        booking: booking::Id,

        /// Name of the missing [`Room`].
        ///
        /// [`Room`]: crate::domain::Room
        room: room::Name,
    },

    /// [`Room`] has more people booked than its current capacity allows.
    ///
    /// [`Room`]: crate::domain::Room
    #[display("`Room(name: {room})` is overbooked: {booked} of {capacity}")]
    Overbooked {
        /// Name of the overbooked [`Room`].
        ///
        /// [`Room`]: crate::domain::Room
        room: room::Name,

        /// Current capacity of the [`Room`].
        ///
        /// [`Room`]: crate::domain::Room
        capacity: u16,

        /// Number of people booked into the [`Room`].
        ///
        /// [`Room`]: crate::domain::Room
        booked: u32,
    },
}

/// Inspects the [`Ledger`] against the [`Catalog`] returning all the found
/// [`Warning`]s.
///
/// Orphaned [`Booking`]s go first in the [`Ledger`] order, followed by
/// overbooked rooms in the [`Catalog`] order.
#[must_use]
pub fn inspect(catalog: &Catalog, ledger: &Ledger) -> Vec<Warning> {
    let orphaned = ledger
        .bookings()
        .iter()
        .filter(|b| catalog.room(&b.room.name).is_none())
        .map(|b| Warning::OrphanedBooking {
            booking: b.id,
            room: b.room.name.clone(),
        });
    let overbooked = catalog.rooms().iter().filter_map(|r| {
        let occupancy = ledger.occupancy(r);
        occupancy.overbooked_by().map(|_| Warning::Overbooked {
            room: r.name.clone(),
            capacity: occupancy.capacity,
            booked: occupancy.booked,
        })
    });
    orphaned.chain(overbooked).collect()
}

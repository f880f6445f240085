//! [`Ledger`] definitions.

use std::collections::BTreeMap;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::domain::{
    booking::{self, Booking},
    floor, room, Room,
};

/// Ordered collection of all the [`Booking`]s.
///
/// Order is the insertion order. It only matters for display purposes.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    /// [`Booking`]s of this [`Ledger`].
    bookings: Vec<Booking>,
}

impl Ledger {
    /// Returns all the [`Booking`]s of this [`Ledger`] in insertion order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the [`Occupancy`] of the provided [`Room`].
    ///
    /// [`Booking`]s are matched by the [`room::Name`] of their snapshot.
    #[must_use]
    pub fn occupancy(&self, room: &Room) -> Occupancy {
        Occupancy {
            capacity: room.capacity.into(),
            booked: self.booked(&room.name),
        }
    }

    /// Returns the number of seats left in the provided [`Room`].
    ///
    /// Never negative: an overbooked [`Room`] has no seats left.
    #[must_use]
    pub fn seats_left(&self, room: &Room) -> u32 {
        self.occupancy(room).seats_left()
    }

    /// Submits a new [`Booking`] of a single seat in the provided [`Room`].
    ///
    /// Leaves this [`Ledger`] untouched on failure.
    ///
    /// # Errors
    ///
    /// - [`AdmissionError::Validation`] if a required field is blank or
    ///   missing (checked first);
    /// - [`AdmissionError::RoomFull`] if the [`Room`] has no seats left.
    pub fn submit(
        &mut self,
        details: booking::Details,
        room: Option<&Room>,
    ) -> Result<&Booking, AdmissionError> {
        use booking::Field as F;
        use AdmissionError as E;

        let booking::Details {
            customer_name,
            booking_date,
            phone_number,
        } = details;

        let customer_name = booking::CustomerName::new(customer_name)
            .ok_or(E::Validation(F::CustomerName))?;
        let booking_date = booking_date.ok_or(E::Validation(F::BookingDate))?;
        let phone_number = booking::PhoneNumber::new(phone_number)
            .ok_or(E::Validation(F::PhoneNumber))?;
        let room = room.ok_or(E::Validation(F::Room))?;

        if self.seats_left(room) < 1 {
            return Err(E::RoomFull(room.name.clone()));
        }

        let idx = self.bookings.len();
        self.bookings.push(Booking {
            id: booking::Id::new(),
            customer_name,
            booking_date,
            phone_number,
            number_of_people: 1,
            room: room.clone(),
        });
        Ok(&self.bookings[idx])
    }

    /// Appends the provided already admitted [`Booking`] as is.
    pub(crate) fn insert(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Cancels the [`Booking`] with the provided [`booking::Id`].
    ///
    /// Returns the cancelled [`Booking`], or [`None`] if there was nothing
    /// to cancel.
    pub fn cancel(&mut self, id: booking::Id) -> Option<Booking> {
        let idx = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(idx))
    }

    /// Returns the [`Room`]s located on the provided floor which still have
    /// seats left, preserving their order.
    pub fn available_rooms<'r>(
        &self,
        floor: floor::Number,
        rooms: impl IntoIterator<Item = &'r Room>,
    ) -> Vec<&'r Room> {
        rooms
            .into_iter()
            .filter(|r| r.floor == floor && self.seats_left(r) > 0)
            .collect()
    }

    /// Groups the [`Booking`]s by the floor of their booked [`Room`].
    ///
    /// Only floors having [`Booking`]s are present. Insertion order is kept
    /// within each group.
    #[must_use]
    pub fn by_floor(&self) -> BTreeMap<floor::Number, Vec<&Booking>> {
        let mut groups = BTreeMap::<_, Vec<_>>::new();
        for b in &self.bookings {
            groups.entry(b.room.floor).or_default().push(b);
        }
        groups
    }

    /// Returns the total number of people booked into the [`Room`] with the
    /// provided [`room::Name`].
    fn booked(&self, room: &room::Name) -> u32 {
        self.bookings
            .iter()
            .filter(|b| &b.room.name == room)
            .map(|b| u32::from(b.number_of_people))
            .sum()
    }
}

impl From<Vec<Booking>> for Ledger {
    fn from(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }
}

/// Occupancy of a [`Room`] derived from a [`Ledger`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occupancy {
    /// Capacity of the [`Room`].
    pub capacity: u16,

    /// Number of people already booked into the [`Room`].
    pub booked: u32,
}

impl Occupancy {
    /// Returns the number of seats left, clamped to zero.
    #[must_use]
    pub fn seats_left(self) -> u32 {
        u32::from(self.capacity).saturating_sub(self.booked)
    }

    /// Returns the number of people booked over the capacity, if any.
    #[must_use]
    pub fn overbooked_by(self) -> Option<u32> {
        self.booked
            .checked_sub(u32::from(self.capacity))
            .filter(|n| *n > 0)
    }
}

/// Error of admitting a new [`Booking`] into a [`Ledger`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum AdmissionError {
    /// Required field is blank or missing.
    #[display("{_0} must be filled out")]
    Validation(#[error(not(source))] booking::Field),

    /// [`Room`] is fully booked.
    #[display("`Room(name: {_0})` is fully booked")]
    RoomFull(#[error(not(source))] room::Name),
}

#[cfg(test)]
mod spec {
    use common::Date;
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::domain::{
        booking::{self, Booking},
        room, Room,
    };

    use super::{AdmissionError, Ledger, Occupancy};

    fn room(name: &str, floor: i16, capacity: u16) -> Room {
        Room {
            name: name.parse().unwrap(),
            floor,
            kind: room::Kind::Custom,
            price: room::Price::new(Decimal::from(5000)).unwrap(),
            capacity: room::Capacity::new(capacity).unwrap(),
        }
    }

    fn details(customer: &str) -> booking::Details {
        booking::Details {
            customer_name: customer.into(),
            booking_date: Some(Date::from(date!(2025-01-05))),
            phone_number: "+91 98765 43210".into(),
        }
    }

    #[test]
    fn fills_room_up_to_capacity() {
        let r101 = room("101", 1, 1);
        let mut ledger = Ledger::default();

        let booking = ledger.submit(details("Asha"), Some(&r101)).unwrap();
        assert_eq!(booking.number_of_people, 1);
        assert_eq!(booking.room, r101);
        assert_eq!(ledger.seats_left(&r101), 0);

        assert_eq!(
            ledger.submit(details("Ravi"), Some(&r101)),
            Err(AdmissionError::RoomFull(r101.name.clone())),
        );
        assert_eq!(ledger.bookings().len(), 1);
    }

    #[test]
    fn validates_fields_before_capacity() {
        let full = room("101", 1, 1);
        let mut ledger = Ledger::default();
        _ = ledger.submit(details("Asha"), Some(&full)).unwrap();

        let blank_name = booking::Details {
            customer_name: "  ".into(),
            ..details("")
        };
        assert_eq!(
            ledger.submit(blank_name, Some(&full)).unwrap_err(),
            AdmissionError::Validation(booking::Field::CustomerName),
        );

        let no_date = booking::Details {
            booking_date: None,
            ..details("Ravi")
        };
        assert_eq!(
            ledger.submit(no_date, Some(&full)).unwrap_err(),
            AdmissionError::Validation(booking::Field::BookingDate),
        );

        let no_phone = booking::Details {
            phone_number: String::new(),
            ..details("Ravi")
        };
        assert_eq!(
            ledger.submit(no_phone, Some(&full)).unwrap_err(),
            AdmissionError::Validation(booking::Field::PhoneNumber),
        );

        assert_eq!(
            ledger.submit(details("Ravi"), None).unwrap_err(),
            AdmissionError::Validation(booking::Field::Room),
        );
        assert_eq!(ledger.bookings().len(), 1);
    }

    #[test]
    fn snapshots_room_at_submission() {
        let mut r102 = room("102", 1, 2);
        let mut ledger = Ledger::default();
        let id = ledger.submit(details("Asha"), Some(&r102)).unwrap().id;

        r102.price = room::Price::new(Decimal::from(9000)).unwrap();

        let booking = ledger.bookings().iter().find(|b| b.id == id).unwrap();
        assert_eq!(booking.revenue(), Decimal::from(5000));
        assert_eq!(ledger.seats_left(&r102), 1);
    }

    #[test]
    fn cancels_by_id() {
        let r102 = room("102", 1, 2);
        let mut ledger = Ledger::default();
        let first = ledger.submit(details("Asha"), Some(&r102)).unwrap().id;
        let second = ledger.submit(details("Asha"), Some(&r102)).unwrap().id;

        let cancelled = ledger.cancel(second).unwrap();
        assert_eq!(cancelled.id, second);
        assert_eq!(ledger.bookings().len(), 1);
        assert_eq!(ledger.bookings()[0].id, first);
        assert_eq!(ledger.seats_left(&r102), 1);

        assert!(ledger.cancel(second).is_none());
        assert_eq!(ledger.bookings().len(), 1);
    }

    #[test]
    fn clamps_overbooked_seats() {
        let mut r201 = room("201", 2, 3);
        let mut ledger = Ledger::default();
        for name in ["A", "B", "C"] {
            _ = ledger.submit(details(name), Some(&r201)).unwrap();
        }

        r201.capacity = room::Capacity::new(1).unwrap();

        let occupancy = ledger.occupancy(&r201);
        assert_eq!(
            occupancy,
            Occupancy {
                capacity: 1,
                booked: 3,
            },
        );
        assert_eq!(occupancy.seats_left(), 0);
        assert_eq!(occupancy.overbooked_by(), Some(2));
        assert_eq!(ledger.seats_left(&r201), 0);
    }

    #[test]
    fn lists_available_rooms_of_floor() {
        let rooms = [room("101", 1, 1), room("102", 1, 2), room("201", 2, 3)];
        let mut ledger = Ledger::default();
        _ = ledger.submit(details("Asha"), Some(&rooms[0])).unwrap();

        let available = ledger.available_rooms(1, &rooms);
        assert_eq!(available, vec![&rooms[1]]);

        let available = ledger.available_rooms(2, &rooms);
        assert_eq!(available, vec![&rooms[2]]);

        assert!(ledger.available_rooms(3, &rooms).is_empty());
    }

    #[test]
    fn groups_by_floor_in_insertion_order() {
        let (r102, r201) = (room("102", 1, 2), room("201", 2, 3));
        let mut ledger = Ledger::default();
        let a = ledger.submit(details("A"), Some(&r201)).unwrap().id;
        let b = ledger.submit(details("B"), Some(&r102)).unwrap().id;
        let c = ledger.submit(details("C"), Some(&r201)).unwrap().id;

        let groups = ledger.by_floor();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            groups[&1].iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![b],
        );
        assert_eq!(
            groups[&2].iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![a, c],
        );

        assert!(Ledger::default().by_floor().is_empty());
    }

    #[test]
    fn keeps_identical_bookings_apart() {
        let r102 = room("102", 1, 2);
        let twin = Booking {
            id: booking::Id::new(),
            customer_name: booking::CustomerName::new("Asha").unwrap(),
            booking_date: Date::from(date!(2025-01-05)),
            phone_number: booking::PhoneNumber::new("1").unwrap(),
            number_of_people: 1,
            room: r102.clone(),
        };
        let other = Booking {
            id: booking::Id::new(),
            ..twin.clone()
        };
        let mut ledger = Ledger::from(vec![twin.clone(), other.clone()]);

        assert_eq!(ledger.cancel(other.id), Some(other));
        assert_eq!(ledger.bookings(), &[twin]);
    }
}

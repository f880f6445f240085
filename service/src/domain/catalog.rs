//! [`Catalog`] definitions.

use derive_more::{Display, Error as StdError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    floor::{self, Floor},
    room::{self, Room},
};

/// Set of [`Floor`]s and [`Room`]s of the property.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Catalog {
    /// [`Floor`]s of this [`Catalog`] sorted by their numbers.
    floors: Vec<Floor>,

    /// [`Room`]s of this [`Catalog`] in the order of addition.
    rooms: Vec<Room>,
}

impl Catalog {
    /// Returns all the [`Floor`]s sorted by their numbers.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Returns all the [`Room`]s in the order of addition.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the [`Room`] with the provided [`room::Name`], if any.
    #[must_use]
    pub fn room(&self, name: &room::Name) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.name == name)
    }

    /// Adds a new [`Floor`] with the provided [`floor::Number`].
    ///
    /// # Errors
    ///
    /// If the number is zero or already taken.
    pub fn add_floor(&mut self, number: floor::Number) -> Result<Floor, Error> {
        let floor = Floor::new(number).ok_or(Error::InvalidFloor(number))?;
        if self.has_floor(number) {
            return Err(Error::FloorExists(number));
        }

        self.floors.push(floor);
        self.floors.sort_unstable();
        Ok(floor)
    }

    /// Changes the number of an existing [`Floor`], moving its [`Room`]s
    /// along.
    ///
    /// # Errors
    ///
    /// If the `from` [`Floor`] doesn't exist, or the `to` number is zero or
    /// already taken.
    pub fn renumber_floor(
        &mut self,
        from: floor::Number,
        to: floor::Number,
    ) -> Result<Floor, Error> {
        let floor = Floor::new(to).ok_or(Error::InvalidFloor(to))?;
        let idx = self
            .floors
            .iter()
            .position(|f| f.number == from)
            .ok_or(Error::FloorNotExists(from))?;
        if from == to {
            return Ok(floor);
        }
        if self.has_floor(to) {
            return Err(Error::FloorExists(to));
        }

        self.floors[idx] = floor;
        self.floors.sort_unstable();
        for room in self.rooms.iter_mut().filter(|r| r.floor == from) {
            room.floor = to;
        }
        Ok(floor)
    }

    /// Deletes the [`Floor`] with the provided [`floor::Number`] along with
    /// all its [`Room`]s.
    ///
    /// Returns the deleted [`Room`]s. Deleting a missing [`Floor`] is a no-op.
    pub fn delete_floor(&mut self, number: floor::Number) -> Vec<Room> {
        self.floors.retain(|f| f.number != number);

        let (removed, kept) = self
            .rooms
            .drain(..)
            .partition::<Vec<_>, _>(|r| r.floor == number);
        self.rooms = kept;
        removed
    }

    /// Adds a new [`Room`].
    ///
    /// # Errors
    ///
    /// If the [`Room`]'s floor doesn't exist, or its [`room::Name`] is taken
    /// (case-insensitively).
    pub fn add_room(&mut self, room: Room) -> Result<&Room, Error> {
        if !self.has_floor(room.floor) {
            return Err(Error::FloorNotExists(room.floor));
        }
        if self.rooms.iter().any(|r| r.name.eq_ignore_case(&room.name)) {
            return Err(Error::RoomExists(room.name));
        }

        let idx = self.rooms.len();
        self.rooms.push(room);
        Ok(&self.rooms[idx])
    }

    /// Replaces the [`Room`] having the provided [`room::Name`] with the
    /// given one.
    ///
    /// Returns the replaced [`Room`]. Existing bookings are not re-validated.
    ///
    /// # Errors
    ///
    /// If the [`Room`] to edit doesn't exist, the new floor doesn't exist, or
    /// the new [`room::Name`] is taken by another [`Room`].
    pub fn edit_room(
        &mut self,
        name: &room::Name,
        room: Room,
    ) -> Result<Room, Error> {
        let idx = self
            .rooms
            .iter()
            .position(|r| &r.name == name)
            .ok_or_else(|| Error::RoomNotExists(name.clone()))?;
        if !self.has_floor(room.floor) {
            return Err(Error::FloorNotExists(room.floor));
        }
        let taken = self
            .rooms
            .iter()
            .enumerate()
            .any(|(i, r)| i != idx && r.name.eq_ignore_case(&room.name));
        if taken {
            return Err(Error::RoomExists(room.name));
        }

        Ok(std::mem::replace(&mut self.rooms[idx], room))
    }

    /// Deletes the [`Room`] with the provided [`room::Name`].
    ///
    /// Returns the deleted [`Room`], if there was any.
    pub fn delete_room(&mut self, name: &room::Name) -> Option<Room> {
        let idx = self.rooms.iter().position(|r| &r.name == name)?;
        Some(self.rooms.remove(idx))
    }

    /// Indicates whether a [`Floor`] with the provided number exists.
    fn has_floor(&self, number: floor::Number) -> bool {
        self.floors.iter().any(|f| f.number == number)
    }
}

impl Default for Catalog {
    /// Seeds two floors and three rooms the property starts with.
    fn default() -> Self {
        let room = |name: &str, floor, kind: room::Kind, price: i64| {
            let capacity = kind.default_capacity()?;
            Some(Room {
                name: room::Name::new(name)?,
                floor,
                kind,
                price: room::Price::new(Decimal::from(price))?,
                capacity,
            })
        };

        Self {
            floors: [1, 2].into_iter().filter_map(Floor::new).collect(),
            rooms: [
                room("101", 1, room::Kind::Single, 5000),
                room("102", 1, room::Kind::Double, 6000),
                room("201", 2, room::Kind::Triple, 7000),
            ]
            .into_iter()
            .flatten()
            .collect(),
        }
    }
}

/// Error of editing a [`Catalog`].
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// [`Floor`] number is not allowed.
    #[display("`{_0}` is not a valid `Floor` number")]
    InvalidFloor(#[error(not(source))] floor::Number),

    /// [`Floor`] with the number already exists.
    #[display("`Floor(number: {_0})` already exists")]
    FloorExists(#[error(not(source))] floor::Number),

    /// [`Floor`] with the number doesn't exist.
    #[display("`Floor(number: {_0})` does not exist")]
    FloorNotExists(#[error(not(source))] floor::Number),

    /// [`Room`] with the name already exists.
    #[display("`Room(name: {_0})` already exists")]
    RoomExists(#[error(not(source))] room::Name),

    /// [`Room`] with the name doesn't exist.
    #[display("`Room(name: {_0})` does not exist")]
    RoomNotExists(#[error(not(source))] room::Name),
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{room, Room};

    use super::{Catalog, Error};

    fn room(name: &str, floor: i16) -> Room {
        Room {
            name: name.parse().unwrap(),
            floor,
            kind: room::Kind::Single,
            price: room::Price::new(Decimal::from(1000)).unwrap(),
            capacity: room::Capacity::new(1).unwrap(),
        }
    }

    #[test]
    fn seeds_defaults() {
        let catalog = Catalog::default();

        assert_eq!(
            catalog.floors().iter().map(|f| f.number).collect::<Vec<_>>(),
            vec![1, 2],
        );
        let names = catalog
            .rooms()
            .iter()
            .map(|r| r.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["101", "102", "201"]);

        let r201 = catalog.room(&"201".parse().unwrap()).unwrap();
        assert_eq!(r201.kind, room::Kind::Triple);
        assert_eq!(u16::from(r201.capacity), 3);
        assert_eq!(r201.price.amount(), Decimal::from(7000));
    }

    #[test]
    fn keeps_floors_unique_and_sorted() {
        let mut catalog = Catalog::default();

        _ = catalog.add_floor(-1).unwrap();
        assert_eq!(catalog.add_floor(2), Err(Error::FloorExists(2)));
        assert_eq!(catalog.add_floor(0), Err(Error::InvalidFloor(0)));
        assert_eq!(
            catalog.floors().iter().map(|f| f.number).collect::<Vec<_>>(),
            vec![-1, 1, 2],
        );
    }

    #[test]
    fn renumbers_floor_with_rooms() {
        let mut catalog = Catalog::default();

        assert_eq!(catalog.renumber_floor(1, 2), Err(Error::FloorExists(2)));
        assert_eq!(catalog.renumber_floor(5, 6), Err(Error::FloorNotExists(5)));

        _ = catalog.renumber_floor(1, 3).unwrap();
        assert_eq!(
            catalog.floors().iter().map(|f| f.number).collect::<Vec<_>>(),
            vec![2, 3],
        );
        assert_eq!(catalog.room(&"101".parse().unwrap()).unwrap().floor, 3);
    }

    #[test]
    fn deletes_floor_with_rooms() {
        let mut catalog = Catalog::default();

        let removed = catalog.delete_floor(1);
        assert_eq!(removed.len(), 2);
        assert_eq!(catalog.rooms().len(), 1);
        assert!(catalog.room(&"101".parse().unwrap()).is_none());

        assert!(catalog.delete_floor(7).is_empty());
    }

    #[test]
    fn rejects_duplicate_room_names_ignoring_case() {
        let mut catalog = Catalog::default();
        _ = catalog.add_room(room("A1", 1)).unwrap();

        assert_eq!(
            catalog.add_room(room("a1", 2)),
            Err(Error::RoomExists("a1".parse().unwrap())),
        );
        assert_eq!(
            catalog.add_room(room("B1", 9)),
            Err(Error::FloorNotExists(9)),
        );
    }

    #[test]
    fn edits_room_keeping_its_own_name() {
        let mut catalog = Catalog::default();
        let name = "102".parse().unwrap();

        let mut edited = room("102", 2);
        edited.capacity = room::Capacity::new(4).unwrap();
        let old = catalog.edit_room(&name, edited.clone()).unwrap();
        assert_eq!(old.floor, 1);
        assert_eq!(catalog.room(&name), Some(&edited));

        assert_eq!(
            catalog.edit_room(&name, room("101", 2)),
            Err(Error::RoomExists("101".parse().unwrap())),
        );
        assert_eq!(
            catalog.edit_room(&"999".parse().unwrap(), room("999", 1)),
            Err(Error::RoomNotExists("999".parse().unwrap())),
        );
    }

    #[test]
    fn deletes_room() {
        let mut catalog = Catalog::default();

        assert!(catalog.delete_room(&"101".parse().unwrap()).is_some());
        assert!(catalog.delete_room(&"101".parse().unwrap()).is_none());
        assert_eq!(catalog.rooms().len(), 2);
    }
}

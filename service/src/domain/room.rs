//! [`Room`] definitions.

use std::str::FromStr;

use common::define_kind;
use derive_more::{AsRef, Display, Into};
use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::floor;

/// Bookable room of the property.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Room {
    /// [`Name`] of this [`Room`], unique within the [`Catalog`].
    ///
    /// [`Catalog`]: crate::domain::Catalog
    pub name: Name,

    /// Number of the floor this [`Room`] is located on.
    pub floor: floor::Number,

    /// [`Kind`] of this [`Room`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// [`Price`] charged per booked person.
    pub price: Price,

    /// Maximum number of people this [`Room`] accommodates.
    pub capacity: Capacity,
}

/// Name of a [`Room`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether this [`Name`] equals the `other` one ignoring case.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `room::Name`")
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Self::new(String::deserialize(d)?)
            .ok_or_else(|| D::Error::custom("invalid `room::Name`"))
    }
}

define_kind! {
    #[doc = "Kind of a [`Room`]."]
    #[case = "lowercase"]
    enum Kind {
        #[doc = "Room for a single person."]
        Single = 1,

        #[doc = "Room for two people."]
        Double = 2,

        #[doc = "Room for three people."]
        Triple = 3,

        #[doc = "Room with an arbitrary [`Capacity`]."]
        Custom = 4,
    }
}

impl Kind {
    /// Returns the [`Capacity`] implied by this [`Kind`].
    ///
    /// [`None`] is returned for [`Kind::Custom`], which requires the
    /// [`Capacity`] to be specified explicitly.
    #[must_use]
    pub fn default_capacity(self) -> Option<Capacity> {
        match self {
            Self::Single => Capacity::new(1),
            Self::Double => Capacity::new(2),
            Self::Triple => Capacity::new(3),
            Self::Custom => None,
        }
    }
}

/// Non-negative price of a [`Room`] per booked person.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] if the provided `amount` is non-negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `room::Price`")
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, s)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Self::new(rust_decimal::serde::float::deserialize(d)?)
            .ok_or_else(|| D::Error::custom("negative `room::Price`"))
    }
}

/// Positive capacity of a [`Room`].
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Capacity(u16);

impl Capacity {
    /// Creates a new [`Capacity`] if the provided `people` number is
    /// positive.
    #[must_use]
    pub const fn new(people: u16) -> Option<Self> {
        if people == 0 {
            None
        } else {
            Some(Self(people))
        }
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Self::new(u16::deserialize(d)?)
            .ok_or_else(|| D::Error::custom("zero `room::Capacity`"))
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Capacity, Kind, Name, Price, Room};

    #[test]
    fn validates_name() {
        assert!(Name::new("101").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" 101").is_none());

        let lower = Name::new("a1").unwrap();
        let upper = Name::new("A1").unwrap();
        assert_ne!(lower, upper);
        assert!(lower.eq_ignore_case(&upper));
    }

    #[test]
    fn validates_price_and_capacity() {
        assert!(Price::new(Decimal::ZERO).is_some());
        assert!(Price::new(Decimal::NEGATIVE_ONE).is_none());
        assert!(Capacity::new(0).is_none());
        assert_eq!(Kind::Double.default_capacity(), Capacity::new(2));
        assert_eq!(Kind::Custom.default_capacity(), None);
    }

    #[test]
    fn deserializes_snapshot() {
        let room: Room = serde_json::from_str(
            r#"{"name":"102","floor":1,"type":"double","price":6000,"capacity":2}"#,
        )
        .unwrap();

        assert_eq!(room.name.to_string(), "102");
        assert_eq!(room.floor, 1);
        assert_eq!(room.kind, Kind::Double);
        assert_eq!(room.price.amount(), Decimal::from(6000));
        assert_eq!(room.capacity, Capacity::new(2).unwrap());

        assert!(serde_json::from_str::<Room>(
            r#"{"name":"x","floor":1,"type":"single","price":-1,"capacity":1}"#,
        )
        .is_err());
        assert!(serde_json::from_str::<Room>(
            r#"{"name":"x","floor":1,"type":"single","price":1,"capacity":0}"#,
        )
        .is_err());
    }
}

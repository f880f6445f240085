//! [`Booking`] definitions.

use common::Date;
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::Room;

/// Booking of a seat in a [`Room`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// ID of this [`Booking`].
    ///
    /// Records persisted without an ID get a fresh one once loaded.
    #[serde(default = "Id::new")]
    pub id: Id,

    /// Name of the customer this [`Booking`] is made for.
    pub customer_name: CustomerName,

    /// [`Date`] this [`Booking`] is made for.
    pub booking_date: Date,

    /// Contact phone number of the customer.
    pub phone_number: PhoneNumber,

    /// Number of seats this [`Booking`] occupies.
    pub number_of_people: People,

    /// Snapshot of the booked [`Room`] taken at the submission time.
    pub room: Room,
}

impl Booking {
    /// Returns the revenue this [`Booking`] brings.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.room.price.amount() * Decimal::from(self.number_of_people)
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Name of a customer making a [`Booking`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Creates a new [`CustomerName`] if the given `name` is not blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty()).then(|| Self(name.to_owned()))
    }
}

impl FromStr for CustomerName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("blank `booking::CustomerName`")
    }
}

impl<'de> Deserialize<'de> for CustomerName {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Self::new(String::deserialize(d)?)
            .ok_or_else(|| D::Error::custom("blank `booking::CustomerName`"))
    }
}

/// Phone number of a customer making a [`Booking`].
///
/// Only non-blankness is checked: the number is kept as entered.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a new [`PhoneNumber`] if the given `phone` is not blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(phone: impl AsRef<str>) -> Option<Self> {
        let phone = phone.as_ref().trim();
        (!phone.is_empty()).then(|| Self(phone.to_owned()))
    }
}

impl FromStr for PhoneNumber {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("blank `booking::PhoneNumber`")
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Self::new(String::deserialize(d)?)
            .ok_or_else(|| D::Error::custom("blank `booking::PhoneNumber`"))
    }
}

/// Number of people a [`Booking`] is made for.
pub type People = u16;

/// Unvalidated details of a [`Booking`] to be submitted.
///
/// Required fields are checked by the [`Ledger`] on submission.
///
/// [`Ledger`]: crate::domain::Ledger
#[derive(Clone, Debug, Default)]
pub struct Details {
    /// Name of the customer.
    pub customer_name: String,

    /// [`Date`] the [`Booking`] is made for.
    pub booking_date: Option<Date>,

    /// Contact phone number of the customer.
    pub phone_number: String,
}

/// Field of [`Details`] required for a [`Booking`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Field {
    /// [`Details::customer_name`] is blank.
    #[display("customer name")]
    CustomerName,

    /// [`Details::booking_date`] is missing.
    #[display("booking date")]
    BookingDate,

    /// [`Details::phone_number`] is blank.
    #[display("phone number")]
    PhoneNumber,

    /// No [`Room`] is selected.
    #[display("room")]
    Room,
}

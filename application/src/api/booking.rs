//! [`Booking`]-related definitions.

use common::{Date, Money};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLInputObject, GraphQLObject, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, Context};

/// Booking of a seat in a `Room`.
#[derive(Clone, Debug, From, Into)]
pub struct Booking(domain::Booking);

/// Booking of a seat in a `Room`.
#[graphql_object(context = Context)]
impl Booking {
    /// Unique identifier of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of the customer this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.customerName",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn customer_name(&self) -> &str {
        self.0.customer_name.as_ref()
    }

    /// `Date` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.bookingDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn booking_date(&self) -> Date {
        self.0.booking_date
    }

    /// Contact phone number of the customer.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.phoneNumber",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn phone_number(&self) -> &str {
        self.0.phone_number.as_ref()
    }

    /// Number of seats this `Booking` occupies.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.numberOfPeople",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn number_of_people(&self) -> i32 {
        self.0.number_of_people.into()
    }

    /// `Room` as it was at the moment this `Booking` was submitted.
    ///
    /// Stays available even if the `Room` has been removed from the catalog
    /// since then.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.room",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn room(&self) -> api::Room {
        self.0.room.clone().into()
    }

    /// Revenue this `Booking` brings.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.revenue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn revenue(&self, ctx: &Context) -> Money {
        ctx.service().money(self.0.revenue())
    }
}

/// Unique identifier of a `Booking`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

/// Input describing a new `Booking`.
///
/// Blank or missing fields are reported with a `VALIDATION_FAILED` error.
/// So is a `bookingDate` that is not a `YYYY-MM-DD` date or an RFC 3339 date
/// and time.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "BookingInput")]
pub struct Input {
    /// Name of the customer.
    pub customer_name: String,

    /// Date the `Booking` is made for.
    pub booking_date: Option<String>,

    /// Contact phone number of the customer.
    pub phone_number: String,

    /// Name of the `Room` to book a seat in.
    pub room: Option<String>,
}

impl From<Input> for service::command::SubmitBooking {
    fn from(input: Input) -> Self {
        let Input {
            customer_name,
            booking_date,
            phone_number,
            room,
        } = input;

        // Unparsable values are reported the same way as missing ones.
        Self {
            details: domain::booking::Details {
                customer_name,
                booking_date: booking_date.and_then(|d| d.parse().ok()),
                phone_number,
            },
            room: room.and_then(|r| r.trim().parse().ok()),
        }
    }
}

/// `Booking`s made for the `Room`s of a single `Floor`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "FloorBookings", context = Context)]
pub struct FloorBookings {
    /// Number of the `Floor`.
    pub floor: i32,

    /// `Booking`s of the `Floor` in the order of submission.
    pub bookings: Vec<Booking>,
}

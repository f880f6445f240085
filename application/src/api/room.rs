//! [`Room`]-related definitions.

use common::Money;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar};
use service::{domain, query, Query as _};

use crate::{api, api::scalar, define_error, AsError, Context, Error};

/// Bookable room.
#[derive(Clone, Debug, From, Into)]
pub struct Room(domain::Room);

/// Bookable room.
#[graphql_object(context = Context)]
impl Room {
    /// Name of this `Room`, unique within the catalog.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Number of the `Floor` this `Room` is located on.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.floor",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn floor(&self) -> i32 {
        self.0.floor.into()
    }

    /// Type of this `Room`.
    #[graphql(name = "type")]
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.type",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Price charged per booked person.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn price(&self, ctx: &Context) -> Money {
        ctx.service().money(self.0.price.amount())
    }

    /// Maximum number of people this `Room` accommodates.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.capacity",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn capacity(&self) -> i32 {
        u16::from(self.0.capacity).into()
    }

    /// Number of seats left in this `Room`.
    ///
    /// Always zero for a `Room` removed from the catalog.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.seatsLeft",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn seats_left(&self, ctx: &Context) -> Result<i32, Error> {
        ctx.service()
            .execute(query::SeatsLeft {
                room: self.0.name.clone(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(api::count)
    }
}

/// Name of a `Room`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RoomName", with = scalar::Via::<domain::room::Name>)]
pub struct Name(domain::room::Name);

/// Non-negative price of a `Room` per booked person.
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RoomPrice", with = scalar::Via::<domain::room::Price>)]
pub struct Price(domain::room::Price);

/// Type of a `Room`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "RoomType")]
pub enum Kind {
    /// Room for a single person.
    Single,

    /// Room for two people.
    Double,

    /// Room for three people.
    Triple,

    /// Room with an arbitrary capacity.
    Custom,
}

impl From<domain::room::Kind> for Kind {
    fn from(kind: domain::room::Kind) -> Self {
        use domain::room::Kind as K;
        match kind {
            K::Single => Self::Single,
            K::Double => Self::Double,
            K::Triple => Self::Triple,
            K::Custom => Self::Custom,
        }
    }
}

impl From<Kind> for domain::room::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Single => Self::Single,
            Kind::Double => Self::Double,
            Kind::Triple => Self::Triple,
            Kind::Custom => Self::Custom,
        }
    }
}

/// Input describing a `Room` to add or to edit.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "RoomInput")]
pub struct Input {
    /// Name of the `Room`.
    pub name: Name,

    /// Number of the `Floor` the `Room` is located on.
    pub floor: i32,

    /// Type of the `Room`.
    #[graphql(name = "type")]
    pub kind: Kind,

    /// Price charged per booked person.
    pub price: Price,

    /// Maximum number of people the `Room` accommodates.
    ///
    /// Defaults to the one implied by the `RoomType`, and is required for a
    /// `CUSTOM` one.
    pub capacity: Option<i32>,
}

impl TryFrom<Input> for domain::Room {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self, Self::Error> {
        let Input {
            name,
            floor,
            kind,
            price,
            capacity,
        } = input;
        let kind = domain::room::Kind::from(kind);

        let capacity = match capacity {
            Some(c) => u16::try_from(c)
                .ok()
                .and_then(domain::room::Capacity::new)
                .ok_or(RoomError::InvalidCapacity)?,
            None => kind
                .default_capacity()
                .ok_or(RoomError::CapacityRequired)?,
        };

        Ok(Self {
            name: name.into(),
            floor: api::floor::number(floor)?,
            kind,
            price: price.into(),
            capacity,
        })
    }
}

define_error! {
    enum RoomError {
        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Capacity must be specified for a custom `Room`"]
        CapacityRequired,

        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Capacity must be a positive number"]
        InvalidCapacity,
    }
}

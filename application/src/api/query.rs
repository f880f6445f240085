//! GraphQL [`Query`]s definitions.

use common::{operations::All, Date};
use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns all the `Floor`s sorted by their numbers.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "floors",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn floors(ctx: &Context) -> Result<Vec<api::Floor>, Error> {
        ctx.service()
            .execute(query::catalog::Floors::by(All))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|floors| floors.into_iter().map(Into::into).collect())
    }

    /// Returns all the `Room`s in the catalog order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "rooms",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn rooms(ctx: &Context) -> Result<Vec<api::Room>, Error> {
        ctx.service()
            .execute(query::catalog::Rooms::by(All))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rooms| rooms.into_iter().map(Into::into).collect())
    }

    /// Returns the `Room` with the specified name, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "room",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn room(
        name: api::room::Name,
        ctx: &Context,
    ) -> Result<Option<api::Room>, Error> {
        ctx.service()
            .execute(query::catalog::ByName::by(name.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|room| room.map(Into::into))
    }

    /// Returns the number of seats left in the `Room` with the specified
    /// name.
    ///
    /// Zero is returned for a `Room` missing from the catalog.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "seatsLeft",
            otel.name = Self::SPAN_NAME,
            room = %room,
        ),
    )]
    pub async fn seats_left(
        room: api::room::Name,
        ctx: &Context,
    ) -> Result<i32, Error> {
        ctx.service()
            .execute(query::SeatsLeft { room: room.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(api::count)
    }

    /// Returns the `Room`s on the specified `Floor` having seats left, in the
    /// catalog order.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FLOOR` - the `Floor` number is zero or out of range.
    #[tracing::instrument(
        skip_all,
        fields(
            floor = floor,
            gql.name = "availableRooms",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn available_rooms(
        floor: i32,
        ctx: &Context,
    ) -> Result<Vec<api::Room>, Error> {
        let floor = api::floor::number(floor).map_err(ctx.error())?;

        ctx.service()
            .execute(query::AvailableRooms { floor })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rooms| rooms.into_iter().map(Into::into).collect())
    }

    /// Returns the `Booking`s grouped by the `Floor`s of their `Room`s.
    ///
    /// Only `Floor`s having `Booking`s are listed, in ascending order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "bookingsByFloor",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn bookings_by_floor(
        ctx: &Context,
    ) -> Result<Vec<api::booking::FloorBookings>, Error> {
        let groups = ctx
            .service()
            .execute(query::BookingsByFloor)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(groups
            .into_iter()
            .map(|(floor, bookings)| api::booking::FloorBookings {
                floor: floor.into(),
                bookings: bookings.into_iter().map(Into::into).collect(),
            })
            .collect())
    }

    /// Returns the total revenue along with the revenue of today and of the
    /// current week.
    ///
    /// "Today" includes all the `Booking`s dated today or later.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "revenueOverview",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn revenue_overview(
        ctx: &Context,
    ) -> Result<api::report::Overview, Error> {
        ctx.service()
            .execute(query::report::Overview { now: ctx.now() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the revenue of the `Booking`s dated within the inclusive
    /// `start..=end` range.
    ///
    /// Omitted bound leaves that side of the range open.
    #[tracing::instrument(
        skip_all,
        fields(
            end = ?end,
            gql.name = "revenueReport",
            otel.name = Self::SPAN_NAME,
            start = ?start,
        ),
    )]
    pub async fn revenue_report(
        start: Option<Date>,
        end: Option<Date>,
        ctx: &Context,
    ) -> Result<api::report::Revenue, Error> {
        ctx.service()
            .execute(query::report::Revenue { start, end })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the number of `Booking`s dated exactly today.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "todaysBookingsCount",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn todays_bookings_count(ctx: &Context) -> Result<i32, Error> {
        ctx.service()
            .execute(query::report::TodaysBookings { now: ctx.now() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(api::count)
    }

    /// Inspects the `Booking`s against the catalog, returning the found
    /// inconsistencies.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "audit",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn audit(
        ctx: &Context,
    ) -> Result<Vec<api::audit::Warning>, Error> {
        ctx.service()
            .execute(query::Audit)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|warnings| warnings.into_iter().map(Into::into).collect())
    }
}

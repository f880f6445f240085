//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, domain, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Books a single seat in the specified `Room`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VALIDATION_FAILED` - a required field is blank or missing;
    /// - `ROOM_NOT_EXISTS` - the `Room` is not in the catalog;
    /// - `ROOM_FULL` - the `Room` has no seats left.
    #[tracing::instrument(
        skip_all,
        fields(
            booking_date = ?input.booking_date,
            gql.name = "submitBooking",
            otel.name = Self::SPAN_NAME,
            room = ?input.room,
        ),
    )]
    pub async fn submit_booking(
        input: api::booking::Input,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        ctx.service()
            .execute(command::SubmitBooking::from(input))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the `Booking` with the specified ID.
    ///
    /// Returns the cancelled `Booking`, or `null` if there was nothing to
    /// cancel.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<Option<api::Booking>, Error> {
        ctx.service()
            .execute(command::CancelBooking { id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|b| b.map(Into::into))
    }

    /// Adds a new `Floor` with the specified number.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FLOOR` - the number is zero or out of range;
    /// - `FLOOR_EXISTS` - the number is taken by another `Floor`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addFloor",
            number = number,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn add_floor(
        number: i32,
        ctx: &Context,
    ) -> Result<api::Floor, Error> {
        let number = api::floor::number(number).map_err(ctx.error())?;

        ctx.service()
            .execute(command::AddFloor { number })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Changes the number of an existing `Floor`, moving its `Room`s along.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FLOOR` - any of the numbers is zero or out of range;
    /// - `FLOOR_NOT_EXISTS` - there is no `Floor` with the `from` number;
    /// - `FLOOR_EXISTS` - the `to` number is taken by another `Floor`.
    #[tracing::instrument(
        skip_all,
        fields(
            from = from,
            gql.name = "renumberFloor",
            otel.name = Self::SPAN_NAME,
            to = to,
        ),
    )]
    pub async fn renumber_floor(
        from: i32,
        to: i32,
        ctx: &Context,
    ) -> Result<api::Floor, Error> {
        let from = api::floor::number(from).map_err(ctx.error())?;
        let to = api::floor::number(to).map_err(ctx.error())?;

        ctx.service()
            .execute(command::RenumberFloor { from, to })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Floor` with the specified number along with all its
    /// `Room`s.
    ///
    /// Returns the deleted `Room`s. Their `Booking`s are kept.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FLOOR` - the number is zero or out of range.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteFloor",
            number = number,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_floor(
        number: i32,
        ctx: &Context,
    ) -> Result<Vec<api::Room>, Error> {
        let number = api::floor::number(number).map_err(ctx.error())?;

        ctx.service()
            .execute(command::DeleteFloor { number })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rooms| rooms.into_iter().map(Into::into).collect())
    }

    /// Adds a new `Room` to the catalog.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VALIDATION_FAILED` - the capacity is missing or not positive;
    /// - `INVALID_FLOOR` - the `Floor` number is zero or out of range;
    /// - `FLOOR_NOT_EXISTS` - the `Floor` is not in the catalog;
    /// - `ROOM_EXISTS` - the name is taken by another `Room` (ignoring
    ///                   case).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addRoom",
            name = %input.name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn add_room(
        input: api::room::Input,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        let room = domain::Room::try_from(input).map_err(ctx.error())?;

        ctx.service()
            .execute(command::AddRoom { room })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Replaces the `Room` with the specified name.
    ///
    /// Existing `Booking`s keep their `Room` snapshots and are not
    /// re-validated against the new capacity.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VALIDATION_FAILED` - the capacity is missing or not positive;
    /// - `INVALID_FLOOR` - the `Floor` number is zero or out of range;
    /// - `ROOM_NOT_EXISTS` - there is no `Room` with the specified name;
    /// - `FLOOR_NOT_EXISTS` - the `Floor` is not in the catalog;
    /// - `ROOM_EXISTS` - the new name is taken by another `Room` (ignoring
    ///                   case).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "editRoom",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn edit_room(
        name: api::room::Name,
        input: api::room::Input,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        let room = domain::Room::try_from(input).map_err(ctx.error())?;

        ctx.service()
            .execute(command::EditRoom {
                name: name.into(),
                room,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Room` with the specified name.
    ///
    /// Returns the deleted `Room`, or `null` if there was nothing to delete.
    /// Its `Booking`s are kept.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteRoom",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_room(
        name: api::room::Name,
        ctx: &Context,
    ) -> Result<Option<api::Room>, Error> {
        ctx.service()
            .execute(command::DeleteRoom { name: name.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|r| r.map(Into::into))
    }
}

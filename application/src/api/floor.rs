//! [`Floor`]-related definitions.

use common::operations::All;
use derive_more::{From, Into};
use juniper::graphql_object;
use service::{domain, query, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Floor holding `Room`s.
#[derive(Clone, Copy, Debug, From, Into)]
pub struct Floor(domain::Floor);

/// Floor holding `Room`s.
#[graphql_object(context = Context)]
impl Floor {
    /// Number of this `Floor`.
    ///
    /// Negative numbers denote underground floors.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Floor.number",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn number(&self) -> i32 {
        self.0.number.into()
    }

    /// `Room`s located on this `Floor`, in the catalog order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Floor.rooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn rooms(&self, ctx: &Context) -> Result<Vec<api::Room>, Error> {
        let rooms = ctx
            .service()
            .execute(query::catalog::Rooms::by(All))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(rooms
            .into_iter()
            .filter(|r| r.floor == self.0.number)
            .map(Into::into)
            .collect())
    }
}

/// Converts the provided GraphQL integer into a [`domain::floor::Number`].
///
/// # Errors
///
/// If the `number` is zero or out of range.
pub fn number(number: i32) -> Result<domain::floor::Number, Error> {
    domain::floor::Number::try_from(number)
        .ok()
        .and_then(domain::Floor::new)
        .map(|f| f.number)
        .ok_or_else(|| FloorError::Invalid.into())
}

define_error! {
    enum FloorError {
        #[code = "INVALID_FLOOR"]
        #[status = BAD_REQUEST]
        #[message = "Floor number must be non-zero and fit into 16 bits"]
        Invalid,
    }
}

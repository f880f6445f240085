//! GraphQL API definitions.

pub mod audit;
pub mod booking;
pub mod floor;
mod mutation;
mod query;
pub mod report;
pub mod room;
pub mod scalar;

use crate::Context;

pub use self::{
    booking::Booking, floor::Floor, mutation::Mutation, query::Query,
    room::Room,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<Context>,
>;

/// Creates a new [`Schema`] without subscriptions.
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, juniper::EmptySubscription::new())
}

/// Converts the provided count into a GraphQL integer, saturating on
/// overflow.
pub(crate) fn count(n: impl TryInto<i32>) -> i32 {
    n.try_into().unwrap_or(i32::MAX)
}

//! [`Overview`] report definition.

use common::Money;
use juniper::GraphQLObject;
use service::query;

use crate::Context;

/// Revenue collected over the fixed periods.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "RevenueOverview", context = Context)]
pub struct Overview {
    /// Revenue of all the `Booking`s.
    pub total: Money,

    /// Revenue of the `Booking`s dated today or later.
    pub today: Money,

    /// Revenue of the `Booking`s dated within the current Sunday-to-Saturday
    /// week.
    pub this_week: Money,
}

impl From<query::report::overview::Output> for Overview {
    fn from(output: query::report::overview::Output) -> Self {
        let query::report::overview::Output {
            total,
            today,
            this_week,
        } = output;
        Self {
            total,
            today,
            this_week,
        }
    }
}

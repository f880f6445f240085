//! [`Revenue`] report definition.

use std::sync::OnceLock;

use common::{Date, Money};
use juniper::graphql_object;
use service::{query, read};

use crate::{api, Context};

/// Revenue of the `Booking`s dated within some range.
#[derive(Clone, Debug)]
pub struct Revenue {
    /// Underlying [`query::report::revenue::Output`].
    output: query::report::revenue::Output,

    /// [`api::Booking`]s of this report.
    bookings: OnceLock<Vec<api::Booking>>,
}

impl From<query::report::revenue::Output> for Revenue {
    fn from(output: query::report::revenue::Output) -> Self {
        Self {
            output,
            bookings: OnceLock::new(),
        }
    }
}

/// Revenue of the `Booking`s dated within some range.
#[graphql_object(name = "RevenueReport", context = Context)]
impl Revenue {
    /// Total revenue of the matching `Booking`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RevenueReport.revenue",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.output.revenue
    }

    /// Matching `Booking`s ordered by their dates.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RevenueReport.bookings",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn bookings(&self) -> &[api::Booking] {
        self.bookings
            .get_or_init(|| {
                self.output.bookings.iter().cloned().map(Into::into).collect()
            })
            .as_slice()
    }

    /// Revenue of the matching `Booking`s per day, ordered by date.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RevenueReport.byDate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn by_date(&self) -> Vec<Point> {
        self.output
            .by_date
            .iter()
            .map(|&point| Point {
                point,
                revenue: Money {
                    amount: point.revenue,
                    currency: self.output.revenue.currency,
                },
            })
            .collect()
    }
}

/// Revenue of a single day in a [`Revenue`] report.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    /// Underlying [`read::revenue::Point`].
    point: read::revenue::Point,

    /// Revenue of the day.
    revenue: Money,
}

/// Revenue of a single day in a `RevenueReport`.
#[graphql_object(name = "RevenuePoint", context = Context)]
impl Point {
    /// Day the revenue is collected for.
    #[must_use]
    pub fn date(&self) -> Date {
        self.point.date
    }

    /// `dd/mm/yyyy` display label of the day.
    #[must_use]
    pub fn label(&self) -> String {
        self.point.label()
    }

    /// Revenue of all the `Booking`s dated this day.
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.revenue
    }
}

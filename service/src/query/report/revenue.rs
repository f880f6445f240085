//! [`Revenue`] report definition.

use common::{
    operations::{All, By, Select},
    Date, Money,
};
use tracerr::Traced;

use crate::{
    domain::{Booking, Ledger},
    infra::{database, Database},
    read::revenue::{self, Point, Window},
    Query, Service,
};

/// [`Query`] for the revenue of [`Booking`]s dated within an inclusive
/// range.
///
/// A missing bound leaves that side of the range open.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Revenue {
    /// First day of the range.
    pub start: Option<Date>,

    /// Last day of the range.
    pub end: Option<Date>,
}

/// Output of the [`Revenue`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Revenue of all the matching [`Booking`]s.
    pub revenue: Money,

    /// Matching [`Booking`]s ordered by their dates.
    pub bookings: Vec<Booking>,

    /// Revenue of the matching [`Booking`]s per day.
    pub by_date: Vec<Point>,
}

impl<Db> Query<Revenue> for Service<Db>
where
    Db: Database<
        Select<By<Ledger, All>>,
        Ok = Ledger,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Revenue { start, end }: Revenue,
    ) -> Result<Self::Ok, Self::Err> {
        let ledger = self
            .database()
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;
        let window = Window::Range { start, end };

        let mut bookings =
            window.filter(ledger.bookings()).cloned().collect::<Vec<_>>();
        bookings.sort_by_key(|b| b.booking_date);

        Ok(Output {
            revenue: self.money(window.sum(&bookings)),
            by_date: revenue::by_date(&bookings),
            bookings,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use rust_decimal::Decimal;

    use crate::{
        command::SubmitBooking, domain::booking, infra::Memory, Command as _,
        Config, Query as _, Service,
    };

    use super::Revenue;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn submit(room: &str, on: &str) -> SubmitBooking {
        SubmitBooking {
            details: booking::Details {
                customer_name: format!("Guest {on}"),
                booking_date: Some(date(on)),
                phone_number: "555".into(),
            },
            room: Some(room.parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn reports_january() {
        let svc = Service::new(Config::default(), Memory::default());
        for (room, on) in [
            ("201", "2025-02-01"),
            ("201", "2025-01-31"),
            ("102", "2025-01-01"),
            ("102", "2024-12-31"),
            ("201", "2025-01-01"),
        ] {
            _ = svc.execute(submit(room, on)).await.unwrap();
        }

        let out = svc
            .execute(Revenue {
                start: Some(date("2025-01-01")),
                end: Some(date("2025-01-31")),
            })
            .await
            .unwrap();

        assert_eq!(out.revenue.amount, Decimal::from(20_000));
        assert_eq!(
            out.bookings
                .iter()
                .map(|b| (b.booking_date, b.room.name.to_string()))
                .collect::<Vec<_>>(),
            vec![
                (date("2025-01-01"), "102".to_owned()),
                (date("2025-01-01"), "201".to_owned()),
                (date("2025-01-31"), "201".to_owned()),
            ],
        );
        assert_eq!(
            out.by_date
                .iter()
                .map(|p| (p.label(), p.revenue))
                .collect::<Vec<_>>(),
            vec![
                ("01/01/2025".to_owned(), Decimal::from(13_000)),
                ("31/01/2025".to_owned(), Decimal::from(7000)),
            ],
        );

        let all = svc.execute(Revenue::default()).await.unwrap();
        assert_eq!(all.bookings.len(), 5);
        assert_eq!(all.revenue.amount, Decimal::from(33_000));
    }
}

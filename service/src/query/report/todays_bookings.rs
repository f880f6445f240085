//! [`TodaysBookings`] definition.

use common::{
    operations::{All, By, Select},
    DateTime,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Booking;
use crate::{
    domain::Ledger,
    infra::{database, Database},
    Query, Service,
};

/// [`Query`] for the number of [`Booking`]s dated exactly today.
///
/// Unlike the today's revenue, future [`Booking`]s are not counted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TodaysBookings {
    /// Moment defining today.
    pub now: DateTime,
}

impl<Db> Query<TodaysBookings> for Service<Db>
where
    Db: Database<
        Select<By<Ledger, All>>,
        Ok = Ledger,
        Err = Traced<database::Error>,
    >,
{
    type Ok = usize;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        TodaysBookings { now }: TodaysBookings,
    ) -> Result<Self::Ok, Self::Err> {
        let today = self.today(now);
        Ok(self
            .database()
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?
            .bookings()
            .iter()
            .filter(|b| b.booking_date == today)
            .count())
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, DateTime};
    use time::{
        macros::{date, datetime},
        UtcOffset,
    };

    use crate::{
        command::SubmitBooking, domain::booking, infra::Memory, Command as _,
        Config, Query as _, Service,
    };

    use super::TodaysBookings;

    fn submit(room: &str, date: Date) -> SubmitBooking {
        SubmitBooking {
            details: booking::Details {
                customer_name: "Ravi".into(),
                booking_date: Some(date),
                phone_number: "555".into(),
            },
            room: Some(room.parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn counts_only_same_day() {
        let svc = Service::new(Config::default(), Memory::default());
        let now = DateTime::from(datetime!(2025-03-12 10:00 UTC));
        let today = Date::from(date!(2025-03-12));

        for date in [
            today,
            today.add_days(1).unwrap(),
            today.add_days(-1).unwrap(),
        ] {
            _ = svc.execute(submit("201", date)).await.unwrap();
        }

        assert_eq!(svc.execute(TodaysBookings { now }).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn observes_day_at_configured_offset() {
        let svc = Service::new(
            Config {
                utc_offset: UtcOffset::from_hms(5, 30, 0).unwrap(),
                ..Config::default()
            },
            Memory::default(),
        );
        // Already 2025-03-13 at +05:30.
        let now = DateTime::from(datetime!(2025-03-12 20:00 UTC));

        _ = svc
            .execute(submit("102", Date::from(date!(2025-03-12))))
            .await
            .unwrap();
        assert_eq!(svc.execute(TodaysBookings { now }).await.unwrap(), 0);

        _ = svc
            .execute(submit("102", Date::from(date!(2025-03-13))))
            .await
            .unwrap();
        assert_eq!(svc.execute(TodaysBookings { now }).await.unwrap(), 1);
    }
}

//! [`Command`] for cancelling a [`Booking`].

use common::operations::{By, Delete};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, Booking},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a [`Booking`].
///
/// Cancelling a missing [`Booking`] is not an error.
#[derive(Clone, Copy, Debug)]
pub struct CancelBooking {
    /// ID of the [`Booking`] to cancel.
    pub id: booking::Id,
}

impl<Db> Command<CancelBooking> for Service<Db>
where
    Db: Database<
        Delete<By<Option<Booking>, booking::Id>>,
        Ok = Option<Booking>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Booking>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CancelBooking) -> Result<Self::Ok, Self::Err> {
        let CancelBooking { id } = cmd;

        let cancelled = self
            .database()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::wrap!())?;

        if cancelled.is_some() {
            log::info!(booking.id = %id, "`Booking` cancelled");
        } else {
            log::debug!(booking.id = %id, "`Booking` is already absent");
        }
        Ok(cancelled)
    }
}

/// Error of [`CancelBooking`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use common::{
        operations::{All, By},
        Date,
    };
    use time::macros::date;

    use crate::{
        command::SubmitBooking,
        domain::{booking, Ledger},
        infra::Memory,
        query::DatabaseQuery,
        Command as _, Config, Query as _, Service,
    };

    use super::CancelBooking;

    fn submit() -> SubmitBooking {
        SubmitBooking {
            details: booking::Details {
                customer_name: "Jane Doe".into(),
                booking_date: Some(Date::from(date!(2025-01-15))),
                phone_number: "+1 555 0100".into(),
            },
            room: Some("201".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn cancels_only_given_booking() {
        let svc = Service::new(Config::default(), Memory::default());
        let first = svc.execute(submit()).await.unwrap();
        let twin = svc.execute(submit()).await.unwrap();

        let cancelled = svc
            .execute(CancelBooking { id: twin.id })
            .await
            .unwrap();
        assert_eq!(cancelled, Some(twin.clone()));

        let again = svc.execute(CancelBooking { id: twin.id }).await.unwrap();
        assert_eq!(again, None);

        let ledger = svc
            .execute(DatabaseQuery::<By<Ledger, _>>::by(All))
            .await
            .unwrap();
        assert_eq!(ledger.bookings(), [first]);
    }
}

//! [`Query`] for [`Booking`]s grouped by floors.

use std::collections::BTreeMap;

use common::operations::{All, By, Select};
use tracerr::Traced;

use crate::{
    domain::{floor, Booking, Ledger},
    infra::{database, Database},
    Service,
};

use super::Query;

/// [`Query`] for [`Booking`]s grouped by the floors of their booked rooms.
///
/// Only floors having [`Booking`]s are present, each keeping the order of
/// submission.
#[derive(Clone, Copy, Debug, Default)]
pub struct BookingsByFloor;

impl<Db> Query<BookingsByFloor> for Service<Db>
where
    Db: Database<
        Select<By<Ledger, All>>,
        Ok = Ledger,
        Err = Traced<database::Error>,
    >,
{
    type Ok = BTreeMap<floor::Number, Vec<Booking>>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: BookingsByFloor) -> Result<Self::Ok, Self::Err> {
        let ledger = self
            .database()
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(ledger
            .by_floor()
            .into_iter()
            .map(|(floor, bookings)| {
                (floor, bookings.into_iter().cloned().collect())
            })
            .collect())
    }
}

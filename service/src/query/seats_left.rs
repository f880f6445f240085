//! [`Query`] for the number of seats left in a [`Room`].

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::room,
    infra::{database, Database},
    read::Occupancy,
    Service,
};
#[cfg(doc)]
use crate::domain::Room;

use super::Query;

/// [`Query`] for the number of seats left in a [`Room`].
///
/// A [`Room`] missing from the [`Catalog`] has no seats.
///
/// [`Catalog`]: crate::domain::Catalog
#[derive(Clone, Debug)]
pub struct SeatsLeft {
    /// Name of the [`Room`] to check.
    pub room: room::Name,
}

impl<Db> Query<SeatsLeft> for Service<Db>
where
    Db: Database<
        Select<By<Option<Occupancy>, room::Name>>,
        Ok = Option<Occupancy>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = u32;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: SeatsLeft) -> Result<Self::Ok, Self::Err> {
        let SeatsLeft { room } = query;

        let occupancy = self
            .database()
            .execute(Select(By::new(room.clone())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(match occupancy {
            Some(o) => {
                if let Some(over) = o.overbooked_by() {
                    log::warn!(
                        room.name = %room,
                        capacity = o.capacity,
                        booked = o.booked,
                        "`Room` is overbooked by {over}",
                    );
                }
                o.seats_left()
            }
            None => {
                log::warn!(room.name = %room, "`Room` is not in `Catalog`");
                0
            }
        })
    }
}

//! [`Query`] for [`Room`]s of a floor having seats left.

use common::operations::{All, By, Select};
use tracerr::Traced;

use crate::{
    domain::{floor, Catalog, Ledger, Room},
    infra::{database, Database},
    Service,
};

use super::Query;

/// [`Query`] for [`Room`]s of a floor having seats left, in the [`Catalog`]
/// order.
#[derive(Clone, Copy, Debug)]
pub struct AvailableRooms {
    /// Number of the floor to look for [`Room`]s on.
    pub floor: floor::Number,
}

impl<Db> Query<AvailableRooms> for Service<Db>
where
    Db: Database<
        Select<By<(Catalog, Ledger), All>>,
        Ok = (Catalog, Ledger),
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: AvailableRooms,
    ) -> Result<Self::Ok, Self::Err> {
        let AvailableRooms { floor } = query;

        let (catalog, ledger) = self
            .database()
            .execute(Select(By::<(Catalog, Ledger), _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(ledger
            .available_rooms(floor, catalog.rooms())
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use time::macros::date;

    use crate::{
        command::SubmitBooking, domain::booking, infra::Memory, Command as _,
        Config, Query as _, Service,
    };

    use super::AvailableRooms;

    #[tokio::test]
    async fn hides_full_rooms() {
        let svc = Service::new(Config::default(), Memory::default());
        let names = |rooms: Vec<crate::domain::Room>| {
            rooms.into_iter().map(|r| r.name.to_string()).collect::<Vec<_>>()
        };

        let rooms = svc.execute(AvailableRooms { floor: 1 }).await.unwrap();
        assert_eq!(names(rooms), vec!["101", "102"]);

        _ = svc
            .execute(SubmitBooking {
                details: booking::Details {
                    customer_name: "Jane".into(),
                    booking_date: Some(Date::from(date!(2025-01-01))),
                    phone_number: "555".into(),
                },
                room: Some("101".parse().unwrap()),
            })
            .await
            .unwrap();

        let rooms = svc.execute(AvailableRooms { floor: 1 }).await.unwrap();
        assert_eq!(names(rooms), vec!["102"]);
        let rooms = svc.execute(AvailableRooms { floor: 3 }).await.unwrap();
        assert!(rooms.is_empty());
    }
}

//! [`Database`] implementations.

use common::operations::{
    All, By, Commit, Delete, Insert, Select, Transact, Update,
};
use tracerr::Traced;

use crate::{
    domain::{booking, room, Booking, Catalog, Floor, Ledger, Room},
    infra::{database, Database},
    read::Occupancy,
};

use super::{Connection, Memory, NonTx, Tx};

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Memory(Tx::begin(self.0.clone()).await))
    }
}

impl Database<Transact> for Memory<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.commit().await.map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Catalog, All>>> for Memory<C> {
    type Ok = Catalog;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Catalog, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.catalog.clone())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Vec<Floor>, All>>> for Memory<C> {
    type Ok = Vec<Floor>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Floor>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.catalog.floors().to_vec())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Vec<Room>, All>>> for Memory<C> {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Room>, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.catalog.rooms().to_vec())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Option<Room>, room::Name>>>
    for Memory<C>
{
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        let name = by.into_inner();
        self.read(|s| s.catalog.room(&name).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Ledger, All>>> for Memory<C> {
    type Ok = Ledger;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Ledger, All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| s.ledger.clone())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<(Catalog, Ledger), All>>>
    for Memory<C>
{
    type Ok = (Catalog, Ledger);
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<(Catalog, Ledger), All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.read(|s| (s.catalog.clone(), s.ledger.clone()))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Select<By<Option<Occupancy>, room::Name>>>
    for Memory<C>
{
    type Ok = Option<Occupancy>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Occupancy>, room::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        let name = by.into_inner();
        self.read(|s| s.catalog.room(&name).map(|r| s.ledger.occupancy(r)))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Insert<Booking>> for Memory<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|s| s.ledger.insert(booking))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Delete<By<Option<Booking>, booking::Id>>>
    for Memory<C>
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.write(|s| s.ledger.cancel(id))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C: Connection> Database<Update<Catalog>> for Memory<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(catalog): Update<Catalog>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|s| s.catalog = catalog)
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{
        All, By, Commit, Insert, Select, Transact, Update,
    };

    use crate::{
        domain::{booking, Booking, Catalog, Ledger},
        infra::{database::Memory, Database as _},
    };

    fn booking() -> Booking {
        let mut ledger = Ledger::default();
        let catalog = Catalog::default();
        ledger
            .submit(
                booking::Details {
                    customer_name: "Jane".into(),
                    booking_date: "2025-01-01".parse().ok(),
                    phone_number: "555".into(),
                },
                catalog.room(&"102".parse().unwrap()),
            )
            .unwrap()
            .clone()
    }

    #[tokio::test]
    async fn commits_transaction() {
        let db = Memory::default();
        let tx = db.execute(Transact).await.unwrap();

        tx.execute(Insert(booking())).await.unwrap();
        let draft = tx
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .unwrap();
        assert_eq!(draft.bookings().len(), 1);

        tx.execute(Commit).await.unwrap();
        let committed = db
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .unwrap();
        assert_eq!(committed, draft);

        assert!(tx.execute(Commit).await.is_err());
        assert!(tx.execute(Insert(booking())).await.is_err());
    }

    #[tokio::test]
    async fn discards_dropped_transaction() {
        let db = Memory::default();
        {
            let tx = db.execute(Transact).await.unwrap();
            tx.execute(Insert(booking())).await.unwrap();
        }

        let ledger = db
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .unwrap();
        assert!(ledger.bookings().is_empty());
    }

    #[tokio::test]
    async fn reads_catalog_and_ledger_from_one_state() {
        let db = Memory::default();
        let tx = db.execute(Transact).await.unwrap();

        let mut catalog = Catalog::default();
        drop(catalog.delete_floor(1));

        let (read, ()) = tokio::join!(
            db.execute(Select(By::<(Catalog, Ledger), _>::new(All))),
            async {
                tx.execute(Update(catalog.clone())).await.unwrap();
                tx.execute(Insert(booking())).await.unwrap();
                tx.execute(Commit).await.unwrap();
            },
        );
        let (read_catalog, read_ledger) = read.unwrap();

        assert_eq!(read_catalog, catalog);
        assert_eq!(read_ledger.bookings().len(), 1);
    }
}

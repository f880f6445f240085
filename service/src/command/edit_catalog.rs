//! [`Command`] for editing the [`Catalog`].

use common::operations::{All, By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Debug, Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{catalog, Catalog},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for applying an arbitrary edit to the [`Catalog`].
///
/// The edit is applied to a snapshot of the [`Catalog`] taken in a
/// transaction, and is discarded if fails.
#[derive(Clone, Copy, Debug)]
pub struct EditCatalog<F>(#[debug(skip)] pub F);

impl<Db, F, R> Command<EditCatalog<F>> for Service<Db>
where
    F: FnOnce(&mut Catalog) -> Result<R, catalog::Error>,
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Catalog, All>>,
            Ok = Catalog,
            Err = Traced<database::Error>,
        > + Database<Update<Catalog>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = R;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        EditCatalog(edit): EditCatalog<F>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut catalog = tx
            .execute(Select(By::<Catalog, _>::new(All)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let out = edit(&mut catalog)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        tx.execute(Update(catalog))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(out)
    }
}

/// Error of editing the [`Catalog`].
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Catalog`] rejected the edit.
    #[display("`Catalog` edit is rejected: {_0}")]
    Catalog(catalog::Error),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By};
    use rust_decimal::Decimal;

    use crate::{
        command::{
            AddFloor, AddRoom, DeleteFloor, DeleteRoom, EditRoom,
            RenumberFloor,
        },
        domain::{catalog, room, Floor, Room},
        infra::Memory,
        query::DatabaseQuery,
        Command as _, Config, Query as _, Service,
    };

    use super::ExecutionError;

    fn room(name: &str, floor: i16) -> Room {
        Room {
            name: name.parse().unwrap(),
            floor,
            kind: room::Kind::Double,
            price: room::Price::new(Decimal::from(4500)).unwrap(),
            capacity: room::Kind::Double.default_capacity().unwrap(),
        }
    }

    async fn names(svc: &Service<Memory>) -> Vec<String> {
        svc.execute(DatabaseQuery::<By<Vec<Room>, _>>::by(All))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name.to_string())
            .collect()
    }

    #[tokio::test]
    async fn edits_floors_and_rooms() {
        let svc = Service::new(Config::default(), Memory::default());

        _ = svc.execute(AddFloor { number: 3 }).await.unwrap();
        _ = svc.execute(AddRoom { room: room("301", 3) }).await.unwrap();
        _ = svc
            .execute(RenumberFloor { from: 3, to: 4 })
            .await
            .unwrap();
        _ = svc
            .execute(EditRoom {
                name: "301".parse().unwrap(),
                room: room("401", 4),
            })
            .await
            .unwrap();
        assert_eq!(names(&svc).await, vec!["101", "102", "201", "401"]);

        let floors = svc
            .execute(DatabaseQuery::<By<Vec<Floor>, _>>::by(All))
            .await
            .unwrap();
        assert_eq!(
            floors.iter().map(|f| f.number).collect::<Vec<_>>(),
            vec![1, 2, 4],
        );

        let removed = svc.execute(DeleteFloor { number: 1 }).await.unwrap();
        assert_eq!(removed.len(), 2);
        let removed = svc
            .execute(DeleteRoom {
                name: "401".parse().unwrap(),
            })
            .await
            .unwrap();
        assert!(removed.is_some());
        assert_eq!(names(&svc).await, vec!["201"]);
    }

    #[tokio::test]
    async fn rejects_duplicate_room() {
        let svc = Service::new(Config::default(), Memory::default());

        _ = svc
            .execute(AddRoom { room: room("A101", 1) })
            .await
            .unwrap();

        let err = svc
            .execute(AddRoom { room: room("a101", 2) })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::Catalog(catalog::Error::RoomExists(_)),
        ));
        assert_eq!(names(&svc).await, vec!["101", "102", "201", "A101"]);
    }
}

//! [`Command`] for deleting a [`Floor`] along with its [`Room`]s.

use common::operations::{
    All, By, Commit, Select, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Floor;
use crate::{
    domain::{floor, Catalog, Room},
    infra::{database, Database},
    Service,
};

use super::{edit_catalog::ExecutionError, Command, EditCatalog};

/// [`Command`] for deleting a [`Floor`] along with its [`Room`]s.
#[derive(Clone, Copy, Debug)]
pub struct DeleteFloor {
    /// Number of the [`Floor`] to delete.
    pub number: floor::Number,
}

impl<Db> Command<DeleteFloor> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Catalog, All>>,
            Ok = Catalog,
            Err = Traced<database::Error>,
        > + Database<Update<Catalog>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Vec<Room>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteFloor) -> Result<Self::Ok, Self::Err> {
        let DeleteFloor { number } = cmd;

        let rooms = self
            .execute(EditCatalog(|c: &mut Catalog| Ok(c.delete_floor(number))))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(
            floor.number = number,
            rooms = rooms.len(),
            "`Floor` deleted",
        );
        Ok(rooms)
    }
}

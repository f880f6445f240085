//! [`Command`] for deleting a [`Room`].

use common::operations::{
    All, By, Commit, Select, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, Catalog, Room},
    infra::{database, Database},
    Service,
};

use super::{edit_catalog::ExecutionError, Command, EditCatalog};

/// [`Command`] for deleting a [`Room`].
#[derive(Clone, Debug)]
pub struct DeleteRoom {
    /// Name of the [`Room`] to delete.
    pub name: room::Name,
}

impl<Db> Command<DeleteRoom> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Catalog, All>>,
            Ok = Catalog,
            Err = Traced<database::Error>,
        > + Database<Update<Catalog>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Option<Room>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteRoom) -> Result<Self::Ok, Self::Err> {
        let DeleteRoom { name } = cmd;

        let room = self
            .execute(EditCatalog(|c: &mut Catalog| Ok(c.delete_room(&name))))
            .await
            .map_err(tracerr::wrap!())?;

        if room.is_some() {
            log::info!(room.name = %name, "`Room` deleted");
        }
        Ok(room)
    }
}

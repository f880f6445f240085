//! [`Command`] for adding a new [`Room`].

use common::operations::{
    All, By, Commit, Select, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Catalog, Room},
    infra::{database, Database},
    Service,
};

use super::{edit_catalog::ExecutionError, Command, EditCatalog};

/// [`Command`] for adding a new [`Room`].
#[derive(Clone, Debug)]
pub struct AddRoom {
    /// New [`Room`] to add.
    pub room: Room,
}

impl<Db> Command<AddRoom> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Catalog, All>>,
            Ok = Catalog,
            Err = Traced<database::Error>,
        > + Database<Update<Catalog>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddRoom) -> Result<Self::Ok, Self::Err> {
        let AddRoom { room } = cmd;

        let room = self
            .execute(EditCatalog(|c: &mut Catalog| c.add_room(room).cloned()))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(room.name = %room.name, "`Room` added");
        Ok(room)
    }
}

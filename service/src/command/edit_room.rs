//! [`Command`] for editing an existing [`Room`].

use common::operations::{
    All, By, Commit, Select, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Booking;
use crate::{
    domain::{room, Catalog, Room},
    infra::{database, Database},
    Service,
};

use super::{edit_catalog::ExecutionError, Command, EditCatalog};

/// [`Command`] for editing an existing [`Room`].
#[derive(Clone, Debug)]
pub struct EditRoom {
    /// Name of the [`Room`] to edit.
    pub name: room::Name,

    /// Edited [`Room`].
    ///
    /// Existing [`Booking`]s keep their snapshots and are not re-validated.
    pub room: Room,
}

impl<Db> Command<EditRoom> for Service<Db>
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

    async fn execute(&self, cmd: EditRoom) -> Result<Self::Ok, Self::Err> {
        let EditRoom { name, room } = cmd;

        let edited = room.clone();
        let old = self
            .execute(EditCatalog(|c: &mut Catalog| c.edit_room(&name, edited)))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(
            room.name = %old.name,
            room.new_name = %room.name,
            "`Room` edited",
        );
        Ok(room)
    }
}

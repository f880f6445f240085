//! [`Command`] for adding a new [`Floor`].

use common::operations::{
    All, By, Commit, Select, Transact, Transacted, Update,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{floor, Catalog, Floor},
    infra::{database, Database},
    Service,
};

use super::{edit_catalog::ExecutionError, Command, EditCatalog};

/// [`Command`] for adding a new [`Floor`].
#[derive(Clone, Copy, Debug)]
pub struct AddFloor {
    /// Number of the new [`Floor`].
    pub number: floor::Number,
}

impl<Db> Command<AddFloor> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Catalog, All>>,
            Ok = Catalog,
            Err = Traced<database::Error>,
        > + Database<Update<Catalog>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Floor;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddFloor) -> Result<Self::Ok, Self::Err> {
        let AddFloor { number } = cmd;

        let floor = self
            .execute(EditCatalog(|c: &mut Catalog| c.add_floor(number)))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(floor.number = number, "`Floor` added");
        Ok(floor)
    }
}

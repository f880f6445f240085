//! [`Command`] for changing the number of a [`Floor`].

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

/// [`Command`] for changing the number of a [`Floor`].
#[derive(Clone, Copy, Debug)]
pub struct RenumberFloor {
    /// Current number of the [`Floor`].
    pub from: floor::Number,

    /// New number of the [`Floor`].
    pub to: floor::Number,
}

impl<Db> Command<RenumberFloor> for Service<Db>
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

    async fn execute(
        &self,
        cmd: RenumberFloor,
    ) -> Result<Self::Ok, Self::Err> {
        let RenumberFloor { from, to } = cmd;

        let floor = self
            .execute(EditCatalog(|c: &mut Catalog| c.renumber_floor(from, to)))
            .await
            .map_err(tracerr::wrap!())?;

        log::info!(floor.from = from, floor.to = to, "`Floor` renumbered");
        Ok(floor)
    }
}

//! [`Query`] for the consistency [`Audit`].

use common::operations::{All, By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Catalog, Ledger},
    infra::{database, Database},
    read::{audit, Warning},
    Service,
};

use super::Query;

/// [`Query`] inspecting bookings against the [`Catalog`] for inconsistencies.
///
/// Every found [`Warning`] is logged as well.
#[derive(Clone, Copy, Debug, Default)]
pub struct Audit;

impl<Db> Query<Audit> for Service<Db>
where
    Db: Database<
        Select<By<(Catalog, Ledger), All>>,
        Ok = (Catalog, Ledger),
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Warning>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Audit) -> Result<Self::Ok, Self::Err> {
        let (catalog, ledger) = self
            .database()
            .execute(Select(By::<(Catalog, Ledger), _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;

        let warnings = audit::inspect(&catalog, &ledger);
        for w in &warnings {
            log::warn!("{w}");
        }
        Ok(warnings)
    }
}

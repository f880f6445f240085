//! [`Overview`] definition.

use common::{
    operations::{All, By, Select},
    DateTime, Money,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Booking;
use crate::{
    domain::Ledger,
    infra::{database, Database},
    read::revenue,
    Query, Service,
};

/// [`Query`] for the revenue overview as of some moment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Overview {
    /// Moment the overview is made at.
    pub now: DateTime,
}

/// Output of the [`Overview`] [`Query`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Output {
    /// Revenue of all the [`Booking`]s.
    pub total: Money,

    /// Revenue of the [`Booking`]s dated today or later.
    pub today: Money,

    /// Revenue of the [`Booking`]s dated within the current week.
    pub this_week: Money,
}

impl<Db> Query<Overview> for Service<Db>
where
    Db: Database<
        Select<By<Ledger, All>>,
        Ok = Ledger,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Overview { now }: Overview,
    ) -> Result<Self::Ok, Self::Err> {
        let ledger = self
            .database()
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .map_err(tracerr::wrap!())?;
        let today = self.today(now);

        Ok(Output {
            total: self.money(revenue::total(&ledger)),
            today: self.money(revenue::today(&ledger, today)),
            this_week: self.money(revenue::this_week(&ledger, today)),
        })
    }
}

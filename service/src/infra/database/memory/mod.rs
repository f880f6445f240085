//! In-memory [`Database`] implementation.

pub mod client;
mod impls;
#[cfg(feature = "storage")]
pub mod storage;

use std::future::Future;

use derive_more::{Deref, Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{Catalog, Ledger},
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

#[cfg(feature = "storage")]
pub use self::storage::Storage;
pub use self::client::{NonTx, Tx};

/// In-memory [`Database`] client.
///
/// Exclusive access is serialized: a [`Tx`] holds the whole [`State`] until
/// it's committed or dropped.
#[derive(Clone, Debug, Deref)]
pub struct Memory<T = NonTx>(T);

impl Memory {
    /// Creates a new [`Memory`] database holding the provided [`State`].
    #[must_use]
    pub fn new(state: State) -> Self {
        Self(NonTx::new(state))
    }

    /// Opens a new [`Memory`] database backed by the provided [`Storage`].
    ///
    /// Every committed change is written back to the [`Storage`].
    ///
    /// # Errors
    ///
    /// If failed to load the [`State`] from the [`Storage`].
    #[cfg(feature = "storage")]
    pub async fn open(
        storage: Storage,
    ) -> Result<Self, Traced<database::Error>> {
        let state = storage.load().await.map_err(tracerr::wrap!())?;
        Ok(Self(NonTx::with_storage(state, storage)))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(State::default())
    }
}

/// Whole state kept by a [`Memory`] database.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// [`Catalog`] of floors and rooms.
    pub catalog: Catalog,

    /// [`Ledger`] of bookings.
    pub ledger: Ledger,
}

/// Generic access to a [`State`] of a [`Memory`] database.
pub trait Connection {
    /// Reads the [`State`] with the provided function.
    ///
    /// # Errors
    ///
    /// If the [`State`] is not accessible anymore.
    fn read<R>(
        &self,
        f: impl FnOnce(&State) -> R,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>;

    /// Modifies the [`State`] with the provided function.
    ///
    /// # Errors
    ///
    /// If the [`State`] is not accessible anymore, or failed to persist it.
    fn write<R>(
        &self,
        f: impl FnOnce(&mut State) -> R,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>;
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Tx`] is used after being committed.
    #[display("`Tx` is already committed")]
    TxCommitted,
}

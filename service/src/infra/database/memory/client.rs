//! [`Memory`] database clients.

use std::sync::Arc;

use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard, OwnedMutexGuard};
use tracerr::Traced;

#[cfg(feature = "storage")]
use super::Storage;
use super::{Connection, Error, State};
use crate::infra::database;
#[cfg(doc)]
use crate::infra::database::Memory;

/// Non-transactional [`Memory`] database client.
///
/// Every write is applied (and persisted) on its own.
#[derive(Clone, Debug)]
pub struct NonTx {
    /// Shared [`State`] of the database.
    state: Arc<Mutex<State>>,

    /// [`Storage`] to persist the [`State`] into, if any.
    #[cfg(feature = "storage")]
    storage: Option<Storage>,
}

impl NonTx {
    /// Creates a new [`NonTx`] client over the provided [`State`].
    #[must_use]
    pub(crate) fn new(state: State) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            #[cfg(feature = "storage")]
            storage: None,
        }
    }

    /// Creates a new [`NonTx`] client over the provided [`State`] persisted
    /// into the given [`Storage`].
    #[cfg(feature = "storage")]
    #[must_use]
    pub(crate) fn with_storage(state: State, storage: Storage) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            storage: Some(storage),
        }
    }

    /// Persists the provided [`State`], if this [`NonTx`] client has a
    /// [`Storage`].
    #[cfg_attr(
        not(feature = "storage"),
        expect(clippy::unused_async, reason = "nothing to persist")
    )]
    async fn persist(
        &self,
        state: &State,
    ) -> Result<(), Traced<database::Error>> {
        #[cfg(feature = "storage")]
        if let Some(storage) = &self.storage {
            storage.save(state).await.map_err(tracerr::wrap!())?;
        }
        #[cfg(not(feature = "storage"))]
        let _ = state;

        Ok(())
    }
}

impl Connection for NonTx {
    async fn read<R>(
        &self,
        f: impl FnOnce(&State) -> R,
    ) -> Result<R, Traced<database::Error>> {
        Ok(f(&*self.state.lock().await))
    }

    async fn write<R>(
        &self,
        f: impl FnOnce(&mut State) -> R,
    ) -> Result<R, Traced<database::Error>> {
        let mut state = self.state.lock().await;
        let mut draft = state.clone();
        let out = f(&mut draft);
        if draft != *state {
            self.persist(&draft).await.map_err(tracerr::wrap!())?;
            *state = draft;
        }
        Ok(out)
    }
}

/// Transactional [`Memory`] database client.
///
/// Holds the [`State`] exclusively and applies writes to its draft copy,
/// which replaces the [`State`] on [`Tx::commit()`]. Dropping all the copies
/// of a [`Tx`] without committing discards the draft.
#[derive(Clone, Debug)]
pub struct Tx {
    /// [`NonTx`] client this [`Tx`] was started from.
    origin: NonTx,

    /// Inner representation of this client, if not committed yet.
    inner: Arc<Mutex<Option<Inner>>>,
}

/// Inner representation of a [`Tx`] client.
#[derive(Debug)]
struct Inner {
    /// Exclusively held [`State`].
    state: OwnedMutexGuard<State>,

    /// Draft of the [`State`] the writes are applied to.
    draft: State,
}

impl Tx {
    /// Starts a new [`Tx`] from the provided [`NonTx`] client, waiting for
    /// other [`Tx`]s to finish.
    pub(crate) async fn begin(origin: NonTx) -> Self {
        let state = Arc::clone(&origin.state).lock_owned().await;
        let draft = state.clone();
        Self {
            origin,
            inner: Arc::new(Mutex::new(Some(Inner { state, draft }))),
        }
    }

    /// Returns the draft [`State`] of this [`Tx`].
    async fn draft(
        &self,
    ) -> Result<MappedMutexGuard<'_, State>, Traced<database::Error>> {
        MutexGuard::try_map(self.inner.lock().await, |inner| {
            inner.as_mut().map(|i| &mut i.draft)
        })
        .map_err(|_| tracerr::new!(database::Error::from(Error::TxCommitted)))
    }

    /// Commits this [`Tx`], persisting its draft and replacing the [`State`]
    /// with it.
    ///
    /// The [`State`] is left untouched if persisting fails.
    ///
    /// # Errors
    ///
    /// If this [`Tx`] is already committed, or failed to persist the draft.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let mut inner = self.inner.lock().await;
        let Inner { mut state, draft } = inner.take().ok_or_else(|| {
            tracerr::new!(database::Error::from(Error::TxCommitted))
        })?;
        if draft != *state {
            self.origin
                .persist(&draft)
                .await
                .map_err(tracerr::wrap!())?;
            *state = draft;
        }
        Ok(())
    }
}

impl Connection for Tx {
    async fn read<R>(
        &self,
        f: impl FnOnce(&State) -> R,
    ) -> Result<R, Traced<database::Error>> {
        Ok(f(&*self.draft().await.map_err(tracerr::wrap!())?))
    }

    async fn write<R>(
        &self,
        f: impl FnOnce(&mut State) -> R,
    ) -> Result<R, Traced<database::Error>> {
        Ok(f(&mut *self.draft().await.map_err(tracerr::wrap!())?))
    }
}

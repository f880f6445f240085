//! JSON files [`Storage`] of a [`Memory`] database.

use std::{
    io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Serialize};
use tracerr::Traced;
use tracing as log;

use super::State;
use crate::infra::database;
#[cfg(doc)]
use crate::{
    domain::{Catalog, Ledger},
    infra::database::Memory,
};

/// JSON files storage of a [`State`].
///
/// The [`Ledger`] and the [`Catalog`] are kept in separate files. Any of
/// them may be omitted, so the corresponding part is kept in memory only.
#[derive(Clone, Debug, Default)]
pub struct Storage {
    /// Path to the file of the [`Ledger`].
    pub bookings: Option<PathBuf>,

    /// Path to the file of the [`Catalog`].
    pub catalog: Option<PathBuf>,
}

impl Storage {
    /// Loads the [`State`] from this [`Storage`].
    ///
    /// Missing files fall back to an empty [`Ledger`] and the default
    /// [`Catalog`].
    ///
    /// # Errors
    ///
    /// If failed to read or parse any of the files.
    pub async fn load(&self) -> Result<State, Traced<database::Error>> {
        let ledger = match &self.bookings {
            Some(path) => read(path).await.map_err(tracerr::wrap!())?,
            None => None,
        };
        let catalog = match &self.catalog {
            Some(path) => read(path).await.map_err(tracerr::wrap!())?,
            None => None,
        };

        Ok(State {
            catalog: catalog.unwrap_or_default(),
            ledger: ledger.unwrap_or_default(),
        })
    }

    /// Saves the provided [`State`] into this [`Storage`].
    ///
    /// # Errors
    ///
    /// If failed to serialize or write any of the files.
    pub async fn save(
        &self,
        state: &State,
    ) -> Result<(), Traced<database::Error>> {
        if let Some(path) = &self.bookings {
            write(path, &state.ledger).await.map_err(tracerr::wrap!())?;
        }
        if let Some(path) = &self.catalog {
            write(path, &state.catalog).await.map_err(tracerr::wrap!())?;
        }
        Ok(())
    }
}

/// Reads a JSON file at the provided `path`.
///
/// [`None`] is returned if there is no such file.
async fn read<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, Traced<database::Error>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("`{}` doesn't exist, using defaults", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(tracerr::new!(database::Error::from(Error::Read {
                path: path.to_path_buf(),
                source,
            })));
        }
    };

    serde_json::from_slice(&bytes).map(Some).map_err(|source| {
        tracerr::new!(database::Error::from(Error::Parse {
            path: path.to_path_buf(),
            source,
        }))
    })
}

/// Writes the provided `value` as a JSON file at the provided `path`.
async fn write<T: Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), Traced<database::Error>> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| {
        tracerr::new!(database::Error::from(Error::Serialize {
            path: path.to_path_buf(),
            source,
        }))
    })?;
    tokio::fs::write(path, bytes).await.map_err(|source| {
        tracerr::new!(database::Error::from(Error::Write {
            path: path.to_path_buf(),
            source,
        }))
    })?;

    log::debug!("`{}` is saved", path.display());
    Ok(())
}

/// [`Storage`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to read a file.
    #[display("failed to read `{}`: {source}", path.display())]
    Read {
        /// Path to the file.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a file.
    #[display("failed to parse `{}`: {source}", path.display())]
    Parse {
        /// Path to the file.
        path: PathBuf,

        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize a value to be written into a file.
    #[display("failed to serialize `{}`: {source}", path.display())]
    Serialize {
        /// Path to the file.
        path: PathBuf,

        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to write a file.
    #[display("failed to write `{}`: {source}", path.display())]
    Write {
        /// Path to the file.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod spec {
    use common::Date;
    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        domain::{booking, Catalog, Ledger},
        infra::database::memory::State,
    };

    use super::Storage;

    fn storage(dir: &TempDir) -> Storage {
        Storage {
            bookings: Some(dir.path().join("bookings.json")),
            catalog: Some(dir.path().join("catalog.json")),
        }
    }

    #[tokio::test]
    async fn falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let state = storage(&dir).load().await.unwrap();

        assert_eq!(state.catalog, Catalog::default());
        assert!(state.ledger.bookings().is_empty());
    }

    #[tokio::test]
    async fn saves_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        let mut state = State::default();
        _ = state.catalog.delete_floor(2);
        let r101 = state.catalog.room(&"101".parse().unwrap()).cloned();
        _ = state
            .ledger
            .submit(
                booking::Details {
                    customer_name: "Jane".into(),
                    booking_date: Some(Date::from(date!(2025-01-31))),
                    phone_number: "555".into(),
                },
                r101.as_ref(),
            )
            .unwrap();

        storage.save(&state).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn loads_legacy_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        tokio::fs::write(
            storage.bookings.as_ref().unwrap(),
            r#"[{
                "customerName": "Jane",
                "bookingDate": "2025-01-31T18:30:00.000Z",
                "phoneNumber": "555",
                "numberOfPeople": 1,
                "room": {
                    "name": "101",
                    "floor": 1,
                    "type": "single",
                    "price": 5000,
                    "capacity": 1
                }
            }]"#,
        )
        .await
        .unwrap();

        let ledger: Ledger = storage.load().await.unwrap().ledger;

        assert_eq!(ledger.bookings().len(), 1);
        let booking = &ledger.bookings()[0];
        assert_eq!(booking.booking_date, Date::from(date!(2025-01-31)));
        assert_eq!(booking.customer_name.to_string(), "Jane");
    }

    #[tokio::test]
    async fn fails_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);
        tokio::fs::write(storage.catalog.as_ref().unwrap(), "{")
            .await
            .unwrap();

        assert!(storage.load().await.is_err());
    }
}

//! [`Command`] for submitting a new [`Booking`].

use common::operations::{All, By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking,
        ledger::AdmissionError,
        room, Booking, Ledger, Room,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`Booking`] of a single seat.
#[derive(Clone, Debug)]
pub struct SubmitBooking {
    /// Details of the new [`Booking`].
    pub details: booking::Details,

    /// Name of the [`Room`] to book a seat in.
    pub room: Option<room::Name>,
}

impl<Db> Command<SubmitBooking> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Room>, room::Name>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Ledger, All>>,
            Ok = Ledger,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SubmitBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitBooking { details, room: name } = cmd;

        // Holds the whole ledger until committed, so no concurrent
        // submission can take the last seat in between.
        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let room = match &name {
            Some(name) => tx
                .execute(Select(By::<Option<Room>, _>::new(name.clone())))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            None => None,
        };

        let mut ledger = tx
            .execute(Select(By::<Ledger, _>::new(All)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Unknown room is reported only once the other fields are valid.
        let booking = ledger
            .submit(details, room.as_ref())
            .map_err(|e| match (e, name) {
                (AdmissionError::Validation(booking::Field::Room), Some(n)) => {
                    E::RoomNotExists(n)
                }
                (e, _) => E::Admission(e),
            })
            .map_err(tracerr::wrap!())?
            .clone();

        tx.execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            booking.id = %booking.id,
            room.name = %booking.room.name,
            "`Booking` submitted",
        );
        Ok(booking)
    }
}

/// Error of [`SubmitBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Booking`] is not admitted.
    #[display("`Booking` is not admitted: {_0}")]
    Admission(AdmissionError),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Room`] with the provided name does not exist.
    #[display("`Room(name: {_0})` does not exist")]
    #[from(ignore)]
    RoomNotExists(#[error(not(source))] room::Name),
}

//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use juniper::IntoFieldError;
use service::{
    command::{edit_catalog, submit_booking},
    domain::{booking, catalog, ledger::AdmissionError},
    infra::database,
};
use tracerr::{Trace, Traced};
use tracing as log;

/// Defines a new error type.
///
/// Every variant maps into an [`Error`] with the given `code`, HTTP `status`
/// and `message`. Several variants may share the same `code`.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[status = $status_code:ident]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error,
            Eq,
            PartialEq,
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            status_code: ::http::StatusCode::$status_code,
                            message: $message.to_owned(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// GraphQL API [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// [`http::StatusCode`] of this [`Error`].
    pub status_code: http::StatusCode,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal server error.
    ///
    /// The details are logged, while the client gets a generic message only.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        let details = msg.to_string();
        log::error!("internal error: {details}");

        Self {
            code: "INTERNAL_SERVER_ERROR",
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_owned(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            status_code: _,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("{trace}"))),
        )
    }
}

impl<S> IntoFieldError<S> for Error
where
    S: From<String>,
{
    fn into_field_error(self) -> juniper::FieldError<S> {
        let mut ext = juniper::Object::with_capacity(2);
        drop(
            ext.add_field("code", juniper::Value::scalar(self.code.to_owned())),
        );
        drop(
            ext.add_field(
                "backtrace",
                juniper::Value::list(
                    self.backtrace
                        .iter()
                        .flat_map(|trace| trace.iter())
                        .map(|frame| juniper::Value::scalar(frame.to_string()))
                        .collect(),
                ),
            ),
        );
        juniper::FieldError::new(self.message, juniper::Value::object(ext))
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    ///
    /// Falls back to [`Error::internal()`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

define_error! {
    enum BookingError {
        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Customer name must be filled out"]
        CustomerNameRequired,

        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Booking date must be filled out"]
        BookingDateRequired,

        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Phone number must be filled out"]
        PhoneNumberRequired,

        #[code = "VALIDATION_FAILED"]
        #[status = BAD_REQUEST]
        #[message = "Room must be selected"]
        RoomRequired,

        #[code = "ROOM_FULL"]
        #[status = CONFLICT]
        #[message = "`Room` has no seats left"]
        RoomFull,

        #[code = "ROOM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Room` with the specified name does not exist"]
        RoomNotExists,
    }
}

impl AsError for AdmissionError {
    fn try_as_error(&self) -> Option<Error> {
        use booking::Field as F;

        Some(
            match self {
                Self::Validation(F::CustomerName) => {
                    BookingError::CustomerNameRequired
                }
                Self::Validation(F::BookingDate) => {
                    BookingError::BookingDateRequired
                }
                Self::Validation(F::PhoneNumber) => {
                    BookingError::PhoneNumberRequired
                }
                Self::Validation(F::Room) => BookingError::RoomRequired,
                Self::RoomFull(_) => BookingError::RoomFull,
            }
            .into(),
        )
    }
}

impl AsError for submit_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Admission(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::RoomNotExists(_) => Some(BookingError::RoomNotExists.into()),
        }
    }
}

define_error! {
    enum CatalogError {
        #[code = "INVALID_FLOOR"]
        #[status = BAD_REQUEST]
        #[message = "Floor number must not be zero"]
        InvalidFloor,

        #[code = "FLOOR_EXISTS"]
        #[status = CONFLICT]
        #[message = "`Floor` with the specified number already exists"]
        FloorExists,

        #[code = "FLOOR_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Floor` with the specified number does not exist"]
        FloorNotExists,

        #[code = "ROOM_EXISTS"]
        #[status = CONFLICT]
        #[message = "`Room` with the specified name already exists"]
        RoomExists,

        #[code = "ROOM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Room` with the specified name does not exist"]
        RoomNotExists,
    }
}

impl AsError for catalog::Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(
            match self {
                Self::InvalidFloor(_) => CatalogError::InvalidFloor,
                Self::FloorExists(_) => CatalogError::FloorExists,
                Self::FloorNotExists(_) => CatalogError::FloorNotExists,
                Self::RoomExists(_) => CatalogError::RoomExists,
                Self::RoomNotExists(_) => CatalogError::RoomNotExists,
            }
            .into(),
        )
    }
}

impl AsError for edit_catalog::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Catalog(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::submit_booking,
        domain::{booking, catalog, ledger::AdmissionError},
        infra::database::{self, memory},
    };

    use super::AsError as _;

    #[test]
    fn maps_admission_errors() {
        let err = AdmissionError::Validation(booking::Field::PhoneNumber)
            .as_error();
        assert_eq!(err.code, "VALIDATION_FAILED");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Phone number must be filled out");

        let err = AdmissionError::RoomFull("101".parse().unwrap()).as_error();
        assert_eq!(err.code, "ROOM_FULL");
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);

        let err = submit_booking::ExecutionError::RoomNotExists(
            "999".parse().unwrap(),
        )
        .as_error();
        assert_eq!(err.code, "ROOM_NOT_EXISTS");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn maps_catalog_errors() {
        let err = catalog::Error::RoomExists("a1".parse().unwrap()).as_error();
        assert_eq!(err.code, "ROOM_EXISTS");

        let err = catalog::Error::InvalidFloor(0).as_error();
        assert_eq!(err.code, "INVALID_FLOOR");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn hides_database_errors() {
        let err = database::Error::from(memory::Error::TxCommitted).as_error();

        assert_eq!(err.code, "INTERNAL_SERVER_ERROR");
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn attaches_trace() {
        let err = tracerr::new!(catalog::Error::FloorExists(1)).as_error();

        assert_eq!(err.code, "FLOOR_EXISTS");
        assert!(err.backtrace.is_some());
        assert!(err.to_string().starts_with("[FLOOR_EXISTS]: "));
    }
}

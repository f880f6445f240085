//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use common::{Currency, Date, DateTime, Money};
use rust_decimal::Decimal;
use smart_default::SmartDefault;
use time::UtcOffset;

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Currency`] the revenue is reported in.
    pub currency: Currency,

    /// [`UtcOffset`] the calendar days are observed at.
    #[default(UtcOffset::UTC)]
    pub utc_offset: UtcOffset,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(config: Config, database: Db) -> Self {
        Self { config, database }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub const fn database(&self) -> &Db {
        &self.database
    }

    /// Returns the calendar [`Date`] of the provided `now` as observed at the
    /// configured [`UtcOffset`].
    #[must_use]
    pub fn today(&self, now: DateTime) -> Date {
        now.date_at(self.config.utc_offset)
    }

    /// Expresses the provided `amount` in the configured [`Currency`].
    #[must_use]
    pub const fn money(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.config.currency,
        }
    }
}

//! [`Config`]-related definitions.

use std::path::PathBuf;

use common::Currency;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::database::memory::Storage as MemoryStorage;
use smart_default::SmartDefault;
use time::{error::ComponentRange, UtcOffset};

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Storage configuration.
    pub storage: Storage,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// [`Currency`] the revenue is reported in.
    pub currency: Currency,

    /// Offset from UTC in hours the calendar days are observed at.
    ///
    /// Decides where "today" and "this week" begin.
    #[default(0)]
    pub utc_offset_hours: i8,
}

impl TryFrom<Service> for service::Config {
    type Error = ComponentRange;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            currency,
            utc_offset_hours,
        } = value;

        Ok(Self {
            currency,
            utc_offset: UtcOffset::from_hms(utc_offset_hours, 0, 0)?,
        })
    }
}

/// Storage configuration.
///
/// Omitted paths keep the corresponding data in memory only.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Storage {
    /// Path to the JSON file with bookings.
    pub bookings: Option<PathBuf>,

    /// Path to the JSON file with floors and rooms.
    pub catalog: Option<PathBuf>,
}

impl Storage {
    /// Indicates whether nothing is persisted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bookings.is_none() && self.catalog.is_none()
    }
}

impl From<Storage> for MemoryStorage {
    fn from(value: Storage) -> Self {
        let Storage { bookings, catalog } = value;
        Self { bookings, catalog }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Currency;
    use config::{builder::DefaultState, ConfigBuilder, FileFormat};
    use time::UtcOffset;

    use super::{Config, LogLevel, Service};

    #[test]
    fn defaults_when_file_is_missing() {
        let config = Config::new("does-not-exist.toml").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.service.currency, Currency::Inr);
        assert!(config.storage.is_empty());

        let service = service::Config::try_from(config.service).unwrap();
        assert_eq!(service.utc_offset, UtcOffset::UTC);
    }

    #[test]
    fn fills_missing_sections() {
        let config = ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::from_str(
                "[service]\nutc_offset_hours = 5\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap();

        assert_eq!(config.service.utc_offset_hours, 5);
        assert_eq!(config.service.currency, Currency::Inr);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(matches!(config.log.level, LogLevel::Info));
        assert!(config.storage.is_empty());
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let service = Service {
            currency: Currency::Usd,
            utc_offset_hours: 30,
        };

        assert!(service::Config::try_from(service).is_err());
    }
}

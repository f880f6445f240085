//! Calendar [`Date`] definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use time::{
    format_description::well_known::Rfc3339, macros::format_description,
    Duration,
};

/// Calendar date without a time-of-day and an offset.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (`1..=12`) of this [`Date`].
    #[must_use]
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    /// Returns the day of month of this [`Date`].
    #[must_use]
    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Shifts this [`Date`] by the provided number of `days` (negative values
    /// shift it into the past).
    ///
    /// [`None`] is returned if the result is out of the supported range.
    #[must_use]
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add(Duration::days(days)).map(Self)
    }

    /// Returns the Sunday starting the week this [`Date`] belongs to.
    #[must_use]
    pub fn start_of_week(self) -> Self {
        let offset = self.0.weekday().number_days_from_sunday();
        self.add_days(-i64::from(offset))
            .unwrap_or(Self(time::Date::MIN))
    }

    /// Returns the Saturday ending the week this [`Date`] belongs to.
    #[must_use]
    pub fn end_of_week(self) -> Self {
        self.start_of_week()
            .add_days(6)
            .unwrap_or(Self(time::Date::MAX))
    }

    /// Formats this [`Date`] as a `dd/mm/yyyy` label.
    ///
    /// Labels are for display only and must not be used for ordering.
    #[must_use]
    pub fn to_label(self) -> String {
        format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }

    /// Formats this [`Date`] as an [RFC 3339] date and time at midnight UTC.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        format!("{self}T00:00:00Z")
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses either a `YYYY-MM-DD` date or an [RFC 3339] date and time. The
    /// latter yields the calendar date observed at its own offset.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        time::Date::parse(s, format_description!("[year]-[month]-[day]"))
            .or_else(|_| {
                time::OffsetDateTime::parse(s, &Rfc3339).map(|dt| dt.date())
            })
            .map(Self)
            .map_err(ParseError::Invalid)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input string is empty.
    #[display("empty date")]
    Empty,

    /// Input string is neither a date nor a date and time.
    #[display("invalid date: {_0}")]
    Invalid(time::error::Parse),
}

mod serde {
    //! Module providing integration with [`serde`] crate.
    //!
    //! [`Date`] is written as an [RFC 3339] date and time at midnight UTC,
    //! and read back from either that or a plain `YYYY-MM-DD` date.
    //!
    //! [RFC 3339]: https://tools.ietf.org/html/rfc3339

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Date;

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_rfc3339())
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(d)?;
            raw.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = crate::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    s.parse().map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use time::macros::date;

    use super::Date;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(date("2025-01-31"), Date::from(date!(2025-01-31)));
        assert_eq!(
            date("2025-01-31T00:00:00.000Z"),
            Date::from(date!(2025-01-31)),
        );
        assert_eq!(
            date("2025-01-31T23:30:00-05:00"),
            Date::from(date!(2025-01-31)),
        );

        assert!("".parse::<Date>().is_err());
        assert!("2025-02-30".parse::<Date>().is_err());
        assert!("31/01/2025".parse::<Date>().is_err());
    }

    #[test]
    fn formats() {
        let d = Date::from(date!(2025-02-01));

        assert_eq!(d.to_string(), "2025-02-01");
        assert_eq!(d.to_label(), "01/02/2025");
        assert_eq!(d.to_rfc3339(), "2025-02-01T00:00:00Z");
    }

    #[test]
    fn week_bounds() {
        // 2025-01-08 is a Wednesday.
        let wed = date("2025-01-08");

        assert_eq!(wed.start_of_week(), date("2025-01-05"));
        assert_eq!(wed.end_of_week(), date("2025-01-11"));

        let sun = date("2025-01-05");
        assert_eq!(sun.start_of_week(), sun);
        assert_eq!(sun.end_of_week(), date("2025-01-11"));

        let sat = date("2025-01-11");
        assert_eq!(sat.start_of_week(), date("2025-01-05"));
        assert_eq!(sat.end_of_week(), sat);
    }

    #[test]
    fn orders_by_calendar() {
        assert!(date("2024-12-31") < date("2025-01-02"));
        assert!(date("2024-12-31").to_label() > date("2025-01-02").to_label());
    }

    #[test]
    fn serde_round_trip() {
        let d = date("2025-01-05");
        let json = serde_json::to_string(&d).unwrap();

        assert_eq!(json, "\"2025-01-05T00:00:00Z\"");
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), d);
        assert_eq!(serde_json::from_str::<Date>("\"2025-01-05\"").unwrap(), d);
    }
}

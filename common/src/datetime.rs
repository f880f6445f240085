//! Date and time utilities.

use derive_more::Debug;
use time::UtcOffset;

use crate::Date;

/// UTC date and time.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,
}

impl DateTime {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc(),
        }
    }

    /// Returns the calendar [`Date`] of this [`DateTime`] as observed at the
    /// provided [`UtcOffset`].
    #[must_use]
    pub fn date_at(&self, offset: UtcOffset) -> Date {
        self.inner.to_offset(offset).date().into()
    }
}

impl From<time::OffsetDateTime> for DateTime {
    fn from(dt: time::OffsetDateTime) -> Self {
        Self {
            inner: dt.to_offset(UtcOffset::UTC),
        }
    }
}

#[cfg(test)]
mod spec {
    use time::{
        macros::{date, datetime},
        UtcOffset,
    };

    use crate::Date;

    use super::DateTime;

    #[test]
    fn observes_date_at_offset() {
        let dt = DateTime::from(datetime!(2025-01-05 22:30 UTC));

        assert_eq!(
            dt.date_at(UtcOffset::UTC),
            Date::from(date!(2025-01-05)),
        );
        assert_eq!(
            dt.date_at(UtcOffset::from_hms(5, 30, 0).unwrap()),
            Date::from(date!(2025-01-06)),
        );
    }

    #[test]
    fn compares_across_offsets() {
        let dt = DateTime::from(datetime!(2025-01-06 04:00 +05:30));

        assert_eq!(dt, DateTime::from(datetime!(2025-01-05 22:30 UTC)));
        assert!(dt < DateTime::from(datetime!(2025-01-05 22:31 UTC)));
    }
}

//! Revenue aggregation over [`Booking`]s.
//!
//! Every function here is a pure fold of `price * people` over the
//! [`Booking`]s falling into some [`Window`].

use std::collections::BTreeMap;

use common::Date;
use rust_decimal::Decimal;

use crate::domain::{Booking, Ledger};

/// Window of [`Booking`] dates the revenue is aggregated over.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Window {
    /// Every [`Booking`].
    Total,

    /// [`Booking`]s dated on or after the given day (future ones included).
    Since(Date),

    /// [`Booking`]s dated within the Sunday-to-Saturday week of the given
    /// day.
    WeekOf(Date),

    /// [`Booking`]s dated within the inclusive range.
    ///
    /// A missing bound leaves that side of the range open.
    Range {
        /// First day of the range.
        start: Option<Date>,

        /// Last day of the range.
        end: Option<Date>,
    },
}

impl Window {
    /// Indicates whether the provided `date` falls into this [`Window`].
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        match *self {
            Self::Total => true,
            Self::Since(day) => date >= day,
            Self::WeekOf(day) => {
                (day.start_of_week()..=day.end_of_week()).contains(&date)
            }
            Self::Range { start, end } => {
                start.is_none_or(|s| date >= s)
                    && end.is_none_or(|e| date <= e)
            }
        }
    }

    /// Filters the provided [`Booking`]s falling into this [`Window`].
    pub fn filter<'b>(
        self,
        bookings: impl IntoIterator<Item = &'b Booking>,
    ) -> impl Iterator<Item = &'b Booking> {
        bookings
            .into_iter()
            .filter(move |b| self.contains(b.booking_date))
    }

    /// Sums the revenue of the provided [`Booking`]s falling into this
    /// [`Window`].
    pub fn sum<'b>(
        self,
        bookings: impl IntoIterator<Item = &'b Booking>,
    ) -> Decimal {
        self.filter(bookings).map(Booking::revenue).sum()
    }
}

/// Returns the revenue of all the [`Booking`]s in the [`Ledger`].
#[must_use]
pub fn total(ledger: &Ledger) -> Decimal {
    Window::Total.sum(ledger.bookings())
}

/// Returns the revenue of the [`Booking`]s dated `today` or later.
#[must_use]
pub fn today(ledger: &Ledger, today: Date) -> Decimal {
    Window::Since(today).sum(ledger.bookings())
}

/// Returns the revenue of the [`Booking`]s dated within the week of `today`.
#[must_use]
pub fn this_week(ledger: &Ledger, today: Date) -> Decimal {
    Window::WeekOf(today).sum(ledger.bookings())
}

/// Returns the revenue of the [`Booking`]s dated within the inclusive
/// `start..=end` range, with missing bounds left open.
#[must_use]
pub fn range(
    ledger: &Ledger,
    start: Option<Date>,
    end: Option<Date>,
) -> Decimal {
    Window::Range { start, end }.sum(ledger.bookings())
}

/// Revenue of a single day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Point {
    /// Day the revenue is collected for.
    pub date: Date,

    /// Revenue of all the [`Booking`]s dated this day.
    pub revenue: Decimal,
}

impl Point {
    /// Returns the `dd/mm/yyyy` display label of this [`Point`].
    #[must_use]
    pub fn label(&self) -> String {
        self.date.to_label()
    }
}

/// Sums the revenue of the provided [`Booking`]s per day, ordered by date.
pub fn by_date<'b>(
    bookings: impl IntoIterator<Item = &'b Booking>,
) -> Vec<Point> {
    let mut days = BTreeMap::<Date, Decimal>::new();
    for b in bookings {
        *days.entry(b.booking_date).or_default() += b.revenue();
    }
    days.into_iter()
        .map(|(date, revenue)| Point { date, revenue })
        .collect()
}

#[cfg(test)]
mod spec {
    use common::Date;
    use rust_decimal::Decimal;

    use crate::domain::{booking, room, Booking, Ledger, Room};

    use super::{by_date, range, this_week, today, total, Window};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn booking(on: &str, price: i64) -> Booking {
        Booking {
            id: booking::Id::new(),
            customer_name: "Jane".parse().unwrap(),
            booking_date: date(on),
            phone_number: "555".parse().unwrap(),
            number_of_people: 1,
            room: Room {
                name: "101".parse().unwrap(),
                floor: 1,
                kind: room::Kind::Custom,
                price: room::Price::new(Decimal::from(price)).unwrap(),
                capacity: room::Capacity::new(10).unwrap(),
            },
        }
    }

    fn ledger(bookings: impl IntoIterator<Item = Booking>) -> Ledger {
        Ledger::from(bookings.into_iter().collect::<Vec<_>>())
    }

    #[test]
    fn totals_every_booking() {
        let mut multi = booking("2025-01-01", 700);
        multi.number_of_people = 3;
        let l = ledger([booking("2024-12-31", 5000), multi]);

        assert_eq!(total(&l), Decimal::from(7100));
        assert_eq!(total(&Ledger::default()), Decimal::ZERO);
    }

    #[test]
    fn today_excludes_past_but_counts_future() {
        let now = date("2025-03-12");
        let l = ledger([
            booking("2025-03-12", 5000),
            booking("2025-03-04", 6000),
            booking("2025-03-20", 100),
        ]);

        assert_eq!(today(&l, now), Decimal::from(5100));
    }

    #[test]
    fn this_week_spans_sunday_to_saturday() {
        // 2025-03-12 is a Wednesday.
        let now = date("2025-03-12");
        let l = ledger([
            booking("2025-03-10", 3000),
            booking("2025-03-12", 2000),
            booking("2025-03-09", 1),
            booking("2025-03-15", 10),
            booking("2025-03-08", 400),
            booking("2025-03-16", 500),
        ]);

        assert_eq!(this_week(&l, now), Decimal::from(5011));
    }

    #[test]
    fn range_is_inclusive_with_open_bounds() {
        let l = ledger([
            booking("2024-12-31", 1),
            booking("2025-01-01", 10),
            booking("2025-01-31", 100),
            booking("2025-02-01", 1000),
        ]);
        let (jan1, jan31) = (date("2025-01-01"), date("2025-01-31"));

        assert_eq!(range(&l, Some(jan1), Some(jan31)), Decimal::from(110));
        assert_eq!(range(&l, Some(jan1), None), Decimal::from(1110));
        assert_eq!(range(&l, None, Some(jan31)), Decimal::from(111));
        assert_eq!(range(&l, None, None), total(&l));
    }

    #[test]
    fn windows_overlap() {
        let day = date("2025-03-12");

        assert!(Window::Total.contains(day));
        assert!(Window::Since(day).contains(day));
        assert!(Window::WeekOf(day).contains(day));
        assert!(!Window::Range {
            start: Some(date("2025-03-13")),
            end: None,
        }
        .contains(day));
    }

    #[test]
    fn by_date_orders_by_calendar() {
        let bookings = [
            booking("2025-02-01", 10),
            booking("2024-12-31", 20),
            booking("2025-02-01", 5),
        ];

        let points = by_date(&bookings);

        assert_eq!(
            points
                .iter()
                .map(|p| (p.label(), p.revenue))
                .collect::<Vec<_>>(),
            vec![
                ("31/12/2024".to_owned(), Decimal::from(20)),
                ("01/02/2025".to_owned(), Decimal::from(15)),
            ],
        );
    }
}

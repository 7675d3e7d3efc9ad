//! Lengths of time, exact and calendar-relative.

pub mod parse;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};


/// A **duration** is a length of time, held in two parts that never
/// mix: an exact part — a normalized count of whole seconds plus a
/// sub-second fraction in microseconds — and an optional calendar part
/// of years and months, which have no fixed length in seconds and so
/// are never reduced to them.
///
/// The exact part keeps its fraction fully carried: the microsecond
/// field stays below one second in magnitude and shares the sign of the
/// seconds field (except at zero).
#[derive(Clone, Copy, Eq)]
pub struct Duration {
    seconds: i64,
    microseconds: i32,
    years: i64,
    months: i64,
}

impl Duration {

    /// A zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, microseconds: 0, years: 0, months: 0 }
    }

    /// A duration of the given number of seconds.
    pub fn of_seconds(seconds: i64) -> Self {
        Self { seconds, microseconds: 0, years: 0, months: 0 }
    }

    /// A duration of the given total number of microseconds, carried
    /// into whole seconds and a fraction.
    pub fn of_microseconds(microseconds: i64) -> Self {
        Self::from_total_micros(microseconds as i128)
    }

    /// A duration built from absolute units. Weeks and days are taken
    /// at their nominal lengths; everything lands in the exact part.
    pub fn of_units(weeks: i64, days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        let total = (weeks * 7 + days) * 86400 + hours * 3600 + minutes * 60 + seconds;
        Self::of_seconds(total)
    }

    /// A duration of calendar years and months only.
    pub fn of_calendar(years: i64, months: i64) -> Self {
        Self { seconds: 0, microseconds: 0, years, months }
    }

    /// This duration with its calendar part replaced.
    pub fn with_calendar(self, years: i64, months: i64) -> Self {
        Self { years, months, ..self }
    }

    /// This duration with the given microseconds added to its exact
    /// part, fully carried.
    pub fn with_microseconds(self, microseconds: i64) -> Self {
        let exact = Self::from_total_micros(self.total_micros() + microseconds as i128);
        Self { years: self.years, months: self.months, ..exact }
    }

    pub(crate) fn from_total_micros(total: i128) -> Self {
        // Truncating division keeps the fraction’s sign matching the
        // whole seconds.
        let seconds = (total / 1_000_000) as i64;
        let microseconds = (total % 1_000_000) as i32;
        Self { seconds, microseconds, years: 0, months: 0 }
    }

    pub(crate) fn total_micros(&self) -> i128 {
        self.seconds as i128 * 1_000_000 + self.microseconds as i128
    }

    /// The whole-seconds part of the exact component.
    pub fn whole_seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second part of the exact component, in microseconds.
    /// Its sign matches `whole_seconds`, except at zero.
    pub fn subsec_microseconds(&self) -> i32 {
        self.microseconds
    }

    /// The calendar years part.
    pub fn years(&self) -> i64 {
        self.years
    }

    /// The calendar months part.
    pub fn months(&self) -> i64 {
        self.months
    }

    /// The calendar part flattened to months. Twelve months and one
    /// year are the same duration.
    pub fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }

    /// Whether this duration carries a calendar part.
    pub fn has_calendar(&self) -> bool {
        self.total_months() != 0
    }

    /// Whether this duration is zero in both parts.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.microseconds == 0 && self.total_months() == 0
    }

    /// The exact part as a floating-point number of seconds. The
    /// calendar part, having no fixed length, is not included.
    pub fn total_seconds(&self) -> f64 {
        self.seconds as f64 + self.microseconds as f64 / 1_000_000.0
    }

    /// The exact part expressed in minutes.
    pub fn in_minutes(&self) -> f64 {
        self.total_seconds() / 60.0
    }

    /// The exact part expressed in hours.
    pub fn in_hours(&self) -> f64 {
        self.total_seconds() / 3600.0
    }

    /// The exact part expressed in nominal days.
    pub fn in_days(&self) -> f64 {
        self.total_seconds() / 86400.0
    }

    /// The exact part expressed in nominal weeks.
    pub fn in_weeks(&self) -> f64 {
        self.in_days() / 7.0
    }

    /// The absolute value of this duration, in both parts.
    pub fn abs(self) -> Self {
        Self {
            seconds: self.seconds.abs(),
            microseconds: self.microseconds.abs(),
            years: self.years.abs(),
            months: self.months.abs(),
        }
    }
}

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        let exact = Self::from_total_micros(self.total_micros() + rhs.total_micros());

        // Carry overflowing months into years, as far as the signs
        // allow.
        let total_months = self.total_months() + rhs.total_months();
        Duration {
            years: total_months / 12,
            months: total_months % 12,
            ..exact
        }
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self + (-rhs)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration {
            seconds: -self.seconds,
            microseconds: -self.microseconds,
            years: -self.years,
            months: -self.months,
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        let exact = Self::from_total_micros(self.total_micros() * amount as i128);
        Duration {
            years: self.years * amount,
            months: self.months * amount,
            ..exact
        }
    }
}

// Comparison flattens the calendar part to months, so twelve months and
// one year are equal; the exact part is compared first, matching the
// ordering the calendar part’s variable length cannot provide.

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl Duration {
    fn comparison_key(&self) -> (i64, i32, i64) {
        (self.seconds, self.microseconds, self.total_months())
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.to_iso_string())
    }
}


#[cfg(test)]
mod test {
    use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of_seconds(10), Duration::of_seconds(2) + Duration::of_seconds(8));
        }

        #[test]
        fn fractions() {
            assert_eq!(Duration::of_microseconds(500_000),
                       Duration::of_microseconds(167_000) + Duration::of_microseconds(333_000));
        }

        #[test]
        fn carrying() {
            assert_eq!(Duration::of_microseconds(1_500_000),
                       Duration::of_microseconds(750_000) + Duration::of_microseconds(750_000));
        }

        #[test]
        fn calendar_months_carry_into_years() {
            let sum = Duration::of_calendar(2, 6) + Duration::of_calendar(1, 8);
            assert_eq!(sum.years(), 4);
            assert_eq!(sum.months(), 2);
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of_seconds(13), Duration::of_seconds(28) - Duration::of_seconds(15));
        }

        #[test]
        fn borrowing() {
            assert_eq!(Duration::of_microseconds(750_000),
                       Duration::of_microseconds(1_500_000) - Duration::of_microseconds(750_000));
        }

        #[test]
        fn below_zero() {
            let negative = Duration::of_seconds(1) - Duration::of_microseconds(2_500_000);
            assert_eq!(negative.whole_seconds(), -1);
            assert_eq!(negative.subsec_microseconds(), -500_000);
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of_seconds(16), Duration::of_seconds(8) * 2);
        }

        #[test]
        fn fractions() {
            assert_eq!(Duration::of_seconds(1), Duration::of_microseconds(500_000) * 2);
        }
    }

    mod comparison {
        use super::*;

        #[test]
        fn a_year_is_twelve_months() {
            assert_eq!(Duration::of_calendar(1, 0), Duration::of_calendar(0, 12));
        }

        #[test]
        fn a_day_is_twentyfour_hours() {
            assert_eq!(Duration::of_units(0, 1, 0, 0, 0), Duration::of_units(0, 0, 24, 0, 0));
        }

        #[test]
        fn ordering() {
            assert!(Duration::of_units(0, 0, 0, 30, 0) < Duration::of_units(0, 0, 1, 0, 0));
            assert!(Duration::of_units(0, 0, 1, 0, 0) < Duration::of_units(0, 0, 2, 0, 0));
        }
    }

    #[test]
    fn absolute_value() {
        let negative = -Duration::of_units(0, 5, 2, 0, 0);
        assert_eq!(negative.abs(), Duration::of_units(0, 5, 2, 0, 0));
    }

    #[test]
    fn invariant_sign_agreement() {
        let d = Duration::of_microseconds(-1_500_000);
        assert_eq!(d.whole_seconds(), -1);
        assert_eq!(d.subsec_microseconds(), -500_000);
    }
}

//! Calendar arithmetic: adding and subtracting calendar and absolute
//! units, anchoring to unit boundaries, and business-day stepping.
//!
//! Month and year arithmetic clamps rather than overflows: adding one
//! month to the 31st of January lands on the last day of February. The
//! clamp is policy, not an error path — constructing an invalid date is
//! impossible, so arithmetic on valid values is total.

use std::ops::{Add, Sub};

use crate::cal::datetime::{Date, DateTime, Month, Time, Year};
use crate::cal::zone::ZoneResolver;
use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::error::Error;
use crate::period::{Period, Unit};


impl Date {

    /// This date moved by the given number of calendar days, in either
    /// direction.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_unix_days(self.to_unix_days() + days)
    }

    /// This date moved by the given number of weeks.
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks * 7)
    }

    /// This date moved by the given number of months.
    ///
    /// The target (year, month) comes from flattening the month count;
    /// if the day does not exist there, it clamps to the last day of
    /// the target month rather than rolling over:
    ///
    /// ```
    /// use calendric::{Date, Month};
    ///
    /// let end_of_january = Date::ymd(2024, Month::January, 31).unwrap();
    /// assert_eq!(end_of_january.add_months(1),
    ///            Date::ymd(2024, Month::February, 29).unwrap());
    /// ```
    pub fn add_months(self, months: i64) -> Self {
        let total = self.year() * 12 + self.month().months_from_january() as i64 + months;
        let year = total.div_euclid(12);

        // rem_euclid keeps the index within 0..12.
        let month = Month::from_zero(total.rem_euclid(12) as i8).unwrap();

        let day = std::cmp::min(self.day(), month.days_in_month(Year(year).is_leap_year()));

        // The day was just clamped into the month, so this cannot fail.
        Self::ymd(year, month, day).unwrap()
    }

    /// This date moved by the given number of years, clamping the 29th
    /// of February to the 28th in non-leap target years.
    pub fn add_years(self, years: i64) -> Self {
        self.add_months(years * 12)
    }

    /// This date stepped by a period: count × unit. Time-of-day units
    /// are finer than a date can carry and are rejected.
    pub fn add_period(self, period: Period) -> Result<Self, Error> {
        match period.unit() {
            Unit::Second | Unit::Minute | Unit::Hour => {
                Err(Error::UnsupportedGranularity { unit: period.unit() })
            }
            Unit::Day     => Ok(self.add_days(period.count())),
            Unit::Week    => Ok(self.add_weeks(period.count())),
            Unit::Month   => Ok(self.add_months(period.count())),
            Unit::Quarter => Ok(self.add_months(period.count() * 3)),
            Unit::Year    => Ok(self.add_years(period.count())),
        }
    }

    /// The exact time between another date and this one, as a duration
    /// of whole days. Positive when `self` is the later date.
    pub fn diff(self, other: Self) -> Duration {
        Duration::of_units(0, self.to_unix_days() - other.to_unix_days(), 0, 0, 0)
    }

    /// The first day within the given granularity: the same day for
    /// `Day`, the preceding Monday for `Week`, the 1st for `Month`, and
    /// so on. Time-of-day units are rejected for a date-only value.
    pub fn start_of(self, unit: Unit) -> Result<Self, Error> {
        unit.require_date_granularity()?;

        Ok(match unit {
            Unit::Day  => self,
            Unit::Week => self.add_days(-(self.weekday().days_from_monday() as i64)),

            // The 1st always exists, so these cannot fail.
            Unit::Month   => Self::ymd(self.year(), self.month(), 1).unwrap(),
            Unit::Quarter => Self::ymd(self.year(), self.month().quarter_start(), 1).unwrap(),
            Unit::Year    => Self::ymd(self.year(), Month::January, 1).unwrap(),

            Unit::Second | Unit::Minute | Unit::Hour => unreachable!(),
        })
    }

    /// The last day within the given granularity, computed as the day
    /// before the next unit starts.
    pub fn end_of(self, unit: Unit) -> Result<Self, Error> {
        unit.require_date_granularity()?;

        Ok(match unit {
            Unit::Day     => self,
            Unit::Week    => self.start_of(Unit::Week)?.add_days(6),
            Unit::Month   => self.start_of(Unit::Month)?.add_months(1).add_days(-1),
            Unit::Quarter => self.start_of(Unit::Quarter)?.add_months(3).add_days(-1),
            Unit::Year    => self.start_of(Unit::Year)?.add_years(1).add_days(-1),

            Unit::Second | Unit::Minute | Unit::Hour => unreachable!(),
        })
    }

    /// This date moved by the given number of business days, where a
    /// business day is Monday through Friday.
    ///
    /// A count of zero is the identity, even on a weekend. For any
    /// other count the walk steps one calendar day at a time, counting
    /// only weekdays, so it can never finish on the weekend it may have
    /// started on: a Saturday plus one business day is the Monday after
    /// it. Negative counts walk backwards the same way.
    pub fn add_business_days(self, count: i64) -> Self {
        let step = if count >= 0 { 1 } else { -1 };
        let mut remaining = count.abs();
        let mut date = self;

        while remaining > 0 {
            date = date.add_days(step);
            if !date.weekday().is_weekend() {
                remaining -= 1;
            }
        }

        date
    }
}

impl Sub<Date> for Date {
    type Output = Duration;

    fn sub(self, other: Date) -> Duration {
        self.diff(other)
    }
}


impl DateTime {

    /// Rebuilds a datetime from a local timeline position, keeping this
    /// value’s offset.
    fn rebuild(self, local_seconds: i64, microsecond: i32) -> Self {
        let rebuilt = Self::at_micro(local_seconds, microsecond);
        match self.offset() {
            Some(offset) => rebuilt.with_offset(offset),
            None         => rebuilt,
        }
    }

    /// This datetime moved by the given number of microseconds of
    /// absolute time, carrying into the local fields.
    pub fn add_microseconds(self, microseconds: i64) -> Self {
        let total = self.local_seconds() as i128 * 1_000_000
                  + self.microsecond() as i128
                  + microseconds as i128;
        self.rebuild(total.div_euclid(1_000_000) as i64,
                     total.rem_euclid(1_000_000) as i32)
    }

    /// This datetime moved by the given number of absolute seconds.
    ///
    /// Absolute units ignore the calendar: the local fields simply
    /// advance by the elapsed time under this value’s own offset. To
    /// follow a *zone* across a DST boundary instead, use
    /// [`add_seconds_in_zone`](DateTime::add_seconds_in_zone).
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.rebuild(self.local_seconds() + seconds, self.microsecond())
    }

    /// This datetime moved by the given number of absolute minutes.
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_seconds(minutes * 60)
    }

    /// This datetime moved by the given number of absolute hours.
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_seconds(hours * 3600)
    }

    /// This datetime moved by the given number of calendar days,
    /// keeping the time of day.
    pub fn add_days(self, days: i64) -> Self {
        self.rebuild(self.local_seconds() + days * 86400, self.microsecond())
    }

    /// This datetime moved by the given number of weeks.
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks * 7)
    }

    /// This datetime moved by the given number of months, with the
    /// day-of-month clamp described at [`Date::add_months`].
    pub fn add_months(self, months: i64) -> Self {
        let date = self.date().add_months(months);
        let rebuilt = Self::new(date, self.time());
        match self.offset() {
            Some(offset) => rebuilt.with_offset(offset),
            None         => rebuilt,
        }
    }

    /// This datetime moved by the given number of years.
    pub fn add_years(self, years: i64) -> Self {
        self.add_months(years * 12)
    }

    /// This datetime stepped by a period: count × unit.
    pub fn add_period(self, period: Period) -> Self {
        match period.unit() {
            Unit::Second  => self.add_seconds(period.count()),
            Unit::Minute  => self.add_minutes(period.count()),
            Unit::Hour    => self.add_hours(period.count()),
            Unit::Day     => self.add_days(period.count()),
            Unit::Week    => self.add_weeks(period.count()),
            Unit::Month   => self.add_months(period.count()),
            Unit::Quarter => self.add_months(period.count() * 3),
            Unit::Year    => self.add_years(period.count()),
        }
    }

    /// This datetime moved by the given number of business days,
    /// keeping the time of day. The stepping rules are those of
    /// [`Date::add_business_days`].
    pub fn add_business_days(self, count: i64) -> Self {
        let date = self.date().add_business_days(count);
        let rebuilt = Self::new(date, self.time());
        match self.offset() {
            Some(offset) => rebuilt.with_offset(offset),
            None         => rebuilt,
        }
    }

    /// The exact time between another datetime and this one. Positive
    /// when `self` is the later value. Aware pairs diff by instant,
    /// naive pairs by their local fields; mixing the two is an error,
    /// never an assumption.
    pub fn diff(self, other: Self) -> Result<Duration, Error> {
        if self.is_aware() != other.is_aware() {
            return Err(Error::TimezoneMismatch);
        }

        let shift = |dt: &Self| dt.offset().map_or(0, |o| o.seconds() as i64);
        let micros = |dt: &Self| {
            (dt.local_seconds() - shift(dt)) as i128 * 1_000_000 + dt.microsecond() as i128
        };

        Ok(Duration::from_total_micros(micros(&self) - micros(&other)))
    }

    /// The first instant within the given granularity: finer fields are
    /// zeroed, and week/month/quarter/year anchor the date the way
    /// [`Date::start_of`] does. Every unit applies to a datetime, so
    /// this is total.
    pub fn start_of(self, unit: Unit) -> Self {
        let zeroed = |date, time| {
            let rebuilt = Self::new(date, time);
            match self.offset() {
                Some(offset) => rebuilt.with_offset(offset),
                None         => rebuilt,
            }
        };

        match unit {
            Unit::Second => self.add_microseconds(-(self.microsecond() as i64)),
            Unit::Minute => self.start_of(Unit::Second)
                                .add_seconds(-(self.second() as i64)),
            Unit::Hour   => self.start_of(Unit::Minute)
                                .add_minutes(-(self.minute() as i64)),
            Unit::Day    => zeroed(self.date(), Time::midnight()),

            // Date-granularity anchors cannot fail on these units.
            Unit::Week | Unit::Month | Unit::Quarter | Unit::Year => {
                zeroed(self.date().start_of(unit).unwrap(),
                       Time::midnight())
            }
        }
    }

    /// The last instant within the given granularity: the start of the
    /// next unit, minus one microsecond — the smallest representable
    /// tick.
    pub fn end_of(self, unit: Unit) -> Self {
        let next_start = match unit {
            Unit::Second  => self.start_of(unit).add_seconds(1),
            Unit::Minute  => self.start_of(unit).add_minutes(1),
            Unit::Hour    => self.start_of(unit).add_hours(1),
            Unit::Day     => self.start_of(unit).add_days(1),
            Unit::Week    => self.start_of(unit).add_days(7),
            Unit::Month   => self.start_of(unit).add_months(1),
            Unit::Quarter => self.start_of(unit).add_months(3),
            Unit::Year    => self.start_of(unit).add_years(1),
        };

        next_start.add_microseconds(-1)
    }

    /// Converts this aware datetime into the named zone: same instant,
    /// local fields re-resolved through the resolver. Naive values have
    /// no instant to convert and are rejected.
    pub fn in_zone(self, zone: &str, resolver: &dyn ZoneResolver) -> Result<Self, Error> {
        let instant = self.instant().ok_or(Error::TimezoneMismatch)?;
        let info = resolver.resolve(zone, instant)?;
        Ok(Self::from_instant(instant, info.offset))
    }

    /// Moves this aware datetime by absolute seconds *in the named
    /// zone*: the instant advances, then the local fields re-resolve
    /// through the resolver at the new instant. Across a DST boundary
    /// this deliberately disagrees with [`add_seconds`](DateTime::add_seconds)
    /// — a 24-hour add and a one-calendar-day add are different
    /// operations there.
    pub fn add_seconds_in_zone(self, seconds: i64, zone: &str, resolver: &dyn ZoneResolver)
        -> Result<Self, Error>
    {
        let instant = self.instant().ok_or(Error::TimezoneMismatch)?
                    + Duration::of_seconds(seconds);
        let info = resolver.resolve(zone, instant)?;
        Ok(Self::from_instant(instant, info.offset))
    }
}

impl Add<Duration> for DateTime {
    type Output = Self;

    /// The exact part of the duration applies as absolute time first;
    /// the calendar part then applies as a month shift with the
    /// day-of-month clamp.
    fn add(self, duration: Duration) -> Self {
        let total = duration.whole_seconds() as i128 * 1_000_000
                  + duration.subsec_microseconds() as i128
                  + self.local_seconds() as i128 * 1_000_000
                  + self.microsecond() as i128;

        let moved = self.rebuild(total.div_euclid(1_000_000) as i64,
                                 total.rem_euclid(1_000_000) as i32);
        moved.add_months(duration.total_months())
    }
}

impl Sub<Duration> for DateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + (-duration)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Time;

    fn date(year: i64, month: Month, day: i8) -> Date {
        Date::ymd(year, month, day).unwrap()
    }

    mod months {
        use super::*;
        use crate::cal::datetime::Month::*;

        #[test]
        fn leap_year_clamp() {
            assert_eq!(date(2024, January, 31).add_months(1), date(2024, February, 29));
        }

        #[test]
        fn common_year_clamp() {
            assert_eq!(date(2023, January, 31).add_months(1), date(2023, February, 28));
        }

        #[test]
        fn no_rollover_into_march() {
            assert_ne!(date(2023, January, 31).add_months(1), date(2023, March, 3));
        }

        #[test]
        fn across_year_boundary() {
            assert_eq!(date(2023, November, 15).add_months(3), date(2024, February, 15));
        }

        #[test]
        fn backwards() {
            assert_eq!(date(2024, March, 31).add_months(-1), date(2024, February, 29));
        }
    }

    mod anchors {
        use super::*;
        use crate::cal::datetime::Month::*;

        #[test]
        fn week_starts_monday() {
            // 2024-01-18 is a Thursday.
            assert_eq!(date(2024, January, 18).start_of(Unit::Week).unwrap(),
                       date(2024, January, 15));
            assert_eq!(date(2024, January, 18).end_of(Unit::Week).unwrap(),
                       date(2024, January, 21));
        }

        #[test]
        fn quarters() {
            assert_eq!(date(2024, May, 20).start_of(Unit::Quarter).unwrap(),
                       date(2024, April, 1));
            assert_eq!(date(2024, May, 20).end_of(Unit::Quarter).unwrap(),
                       date(2024, June, 30));
        }

        #[test]
        fn hour_of_a_date_is_rejected() {
            assert_eq!(date(2024, May, 20).start_of(Unit::Hour),
                       Err(Error::UnsupportedGranularity { unit: Unit::Hour }));
        }

        #[test]
        fn end_of_day_for_datetimes() {
            let noon = DateTime::new(date(2024, May, 20), Time::hms(12, 30, 0).unwrap());
            let end = noon.end_of(Unit::Day);

            assert_eq!(end.time(), Time::hms_micro(23, 59, 59, 999_999).unwrap());
        }
    }

    mod durations {
        use super::*;
        use crate::cal::datetime::Month::*;

        #[test]
        fn datetime_plus_duration() {
            let start = DateTime::new(date(2024, January, 31), Time::midnight());
            let moved = start + Duration::of_calendar(0, 1);

            assert_eq!(moved.date(), date(2024, February, 29));
        }

        #[test]
        fn naive_diff() {
            let a = DateTime::new(date(2024, January, 2), Time::midnight());
            let b = DateTime::new(date(2024, January, 1), Time::midnight());

            assert_eq!(a.diff(b).unwrap(), Duration::of_seconds(86400));
        }

        #[test]
        fn mixed_diff_is_an_error() {
            let naive = DateTime::new(date(2024, January, 1), Time::midnight());
            let aware = naive.with_offset(crate::cal::offset::Offset::utc());

            assert_eq!(naive.diff(aware), Err(Error::TimezoneMismatch));
        }
    }
}

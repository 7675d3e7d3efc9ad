//! Dates, times, datetimes, months, and weekdays.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::fmt::ISO;
use crate::cal::offset::Offset;
use crate::cal::{DatePiece, TimePiece};
use crate::error::Error;
use crate::instant::Instant;
use crate::system::sys_time;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ```
    /// use calendric::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year: 365, or 366 for leap years.
    pub fn day_count(self) -> i64 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    pub(crate) fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // The Gregorian calendar repeats every 400 years, so operate on
        // the remainder within the current 400-year cycle.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // 97 leap years per 400 years
            + 24 * num_100y_cycles  // 24 leap years per 100 years
            - i64::from(currently_leap_year);

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y: i64 = 365 * 4 + 1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. Leap seconds are ignored throughout this
/// library.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// The internal reference point sits immediately after a possible
/// leap-year day and at the start of a 400-year Gregorian cycle, which
/// reduces the calendar calculations to plain division. Dates get shifted
/// between this reference point and the more familiar Unix epoch on the
/// way in and out.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // years from 1970 to 2000
                            + 7          // leap days over those years
                            + 31 + 29;   // January and February of 2000

/// Days elapsed at the end of each month, counted from the start of
/// March (the month right after the internal reference point), going
/// backwards and skipping February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,       // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,            // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,                 // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,                      // September
      31 + 30 + 31 + 30 + 31 + 31,                           // August
      31 + 30 + 31 + 30 + 31,                                // July
      31 + 30 + 31 + 30,                                     // June
      31 + 30 + 31,                                          // May
      31 + 30,                                               // April
      31];                                                   // March


/// A **date** is a day-long span on the timeline in the proleptic
/// Gregorian calendar, without a time or a time zone.
#[derive(Eq, Clone, Copy, Hash)]
pub struct Date {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **time** is a time of day, without a date or a time zone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Time {
    hour:   i8,
    minute: i8,
    second: i8,
    microsecond: i32,
}

/// A **datetime** is a date paired with a time of day, either *naive*
/// (carrying no UTC offset) or *aware* (carrying the offset that makes
/// it an unambiguous instant).
///
/// Naive and aware values never mix silently: comparing one of each
/// yields no ordering, and operations that would have to combine them
/// fail with [`Error::TimezoneMismatch`].
#[derive(Clone, Copy)]
pub struct DateTime {
    date: Date,
    time: Time,
    offset: Option<Offset>,
}


impl Date {

    /// Creates a new date from the given year, month, and day fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ```
    /// use calendric::{Date, DatePiece, Month};
    ///
    /// let date = Date::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(Date::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(|days| Self::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Creates a new date from a year and a number (from 1) for its
    /// month, as a shortcut for pairing `Month::from_one` with `ymd`.
    pub fn ymd_number(year: i64, month: i8, day: i8) -> Result<Self, Error> {
        Self::ymd(year, Month::from_one(month)?, day)
    }

    /// Creates a new date from the given year and day-of-year values.
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if yearday.is_within(1 .. Year(year).day_count() + 1) {
            let jan_1 = YMD { year, month: January, day: 1 };
            let days = jan_1.to_days_since_epoch()?;
            Ok(Self::from_days_since_epoch(days + yearday - 1 - EPOCH_DIFFERENCE))
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Creates a new date set to the computer’s current day.
    pub fn today() -> Self {
        let (seconds, _) = unsafe { sys_time() };
        let (days, _) = split_cycles(seconds, SECONDS_IN_DAY);
        Self::from_unix_days(days)
    }

    /// Computes a date — year, month, day, weekday, and yearday — given
    /// the number of days that have passed since the internal reference
    /// point. Used by all the other constructors.
    fn from_days_since_epoch(days: i64) -> Self {

        // Count off 400-year, 100-year, and 4-year Gregorian cycles,
        // whittling the remainder down to days-into-current-year.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        let num_100y_cycles = remainder / DAYS_IN_100Y;
        remainder -= num_100y_cycles * DAYS_IN_100Y;

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;

        // A year here is a leap year when it is the first of a 4-year
        // cycle, unless it is the first of a 100-year cycle that is not
        // also the first of a 400-year cycle.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // 306 is the day count of March through December, the months on
        // the near side of the reference point.
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        years += 4 * num_4y_cycles
             + 100 * num_100y_cycles
             + 400 * num_400y_cycles;

        // Scan the triangle for the month with the matching number of
        // elapsed days (the triangle is backwards, hence 11 - index).
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // no month found means February
        };

        // Compensate for the reference point being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // The wrap-around above keeps the month within 0..12, so this
        // cannot fail.
        let month_variant = Month::from_zero(month as i8).unwrap();

        // Adjust for humans: days and yeardays count from 1, and years
        // count from the reference point.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: month_variant,
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// Computes a date given the number of days since the Unix epoch.
    pub(crate) fn from_unix_days(days: i64) -> Self {
        Self::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// The number of days between the Unix epoch and this date.
    pub(crate) fn to_unix_days(self) -> i64 {
        self.ymd.days_since_epoch_unchecked()
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl Time {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// Creates a new time with the given hour and minute fields, and
    /// the second and microsecond fields set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms(hour, minute, 0)
    }

    /// Creates a new time with the given hour, minute, and second
    /// fields, and the microsecond field set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_micro(hour, minute, second, 0)
    }

    /// Creates a new time with the given hour, minute, second, and
    /// microsecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    pub fn hms_micro(hour: i8, minute: i8, second: i8, microsecond: i32) -> Result<Self, Error> {
        if hour.is_within(0..24) && minute.is_within(0..60)
        && second.is_within(0..60) && microsecond.is_within(0..1_000_000)
        {
            Ok(Self { hour, minute, second, microsecond })
        }
        else {
            Err(Error::InvalidTime)
        }
    }

    /// Computes the hour, minute, and second fields from a number of
    /// seconds that have elapsed since midnight.
    pub(crate) fn from_seconds_since_midnight(seconds: i64, microsecond: i32) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            microsecond,
        }
    }

    /// The number of seconds since midnight this time is at, ignoring
    /// microseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl TimePiece for Time {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn microsecond(&self) -> i32 { self.microsecond }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({})", self.iso())
    }
}


impl DateTime {

    /// Creates a new naive datetime from a date and a time of day.
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time, offset: None }
    }

    /// Creates a new aware datetime from a date, a time of day, and the
    /// UTC offset in effect there.
    pub fn new_with_offset(date: Date, time: Time, offset: Offset) -> Self {
        Self { date, time, offset: Some(offset) }
    }

    /// Expands a date to the start of its calendar day: midnight, with
    /// the given offset (or none, for a naive result).
    pub fn from_date(date: Date, offset: Option<Offset>) -> Self {
        Self { date, time: Time::midnight(), offset }
    }

    /// Computes a naive datetime from the number of seconds that have
    /// elapsed since midnight, 1st January, 1970.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_micro(seconds_since_1970_epoch, 0)
    }

    /// Computes a naive datetime from the number of seconds that have
    /// elapsed since midnight, 1st January, 1970, and the microsecond of
    /// that second.
    pub fn at_micro(seconds_since_1970_epoch: i64, microsecond: i32) -> Self {
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: Date::from_unix_days(days),
            time: Time::from_seconds_since_midnight(secs, microsecond),
            offset: None,
        }
    }

    /// Computes the aware datetime that an instant reads as under the
    /// given UTC offset.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        let local = instant.seconds() + offset.seconds() as i64;
        Self::at_micro(local, instant.microseconds()).with_offset(offset)
    }

    /// Creates a new aware datetime set to the current time, in UTC.
    pub fn now() -> Self {
        Self::from_instant(Instant::now(), Offset::utc())
    }

    /// A copy of this datetime carrying the given offset. The local
    /// fields are unchanged; this pins down *which* instant they denote.
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset: Some(offset), ..self }
    }

    /// A naive copy of this datetime, with the offset dropped and the
    /// local fields unchanged.
    pub fn naive(self) -> Self {
        Self { offset: None, ..self }
    }

    /// The date portion of this datetime.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The time portion of this datetime.
    pub fn time(&self) -> Time {
        self.time
    }

    /// The UTC offset of this datetime, if it is aware.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Whether this datetime carries a UTC offset.
    pub fn is_aware(&self) -> bool {
        self.offset.is_some()
    }

    /// Whether this datetime carries no UTC offset.
    pub fn is_naive(&self) -> bool {
        self.offset.is_none()
    }

    /// The exact instant this datetime denotes, or `None` for a naive
    /// value, which denotes no single instant.
    pub fn instant(&self) -> Option<Instant> {
        let offset = self.offset?;
        Some(Instant::at_micro(self.local_seconds() - offset.seconds() as i64,
                               self.time.microsecond))
    }

    /// The local fields read as a count of seconds since the Unix
    /// epoch, ignoring any offset.
    pub(crate) fn local_seconds(&self) -> i64 {
        self.date.to_unix_days() * SECONDS_IN_DAY + self.time.to_seconds()
    }

    /// Timeline position used for comparing two values of like
    /// awareness: aware values compare by instant, naive ones by their
    /// local fields.
    fn comparison_key(&self) -> (i64, i32) {
        let shift = self.offset.map_or(0, |o| o.seconds() as i64);
        (self.local_seconds() - shift, self.time.microsecond)
    }
}

impl DatePiece for DateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for DateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn microsecond(&self) -> i32 { self.time.microsecond }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({})", self.iso())
    }
}

// Mixed naive/aware values are deliberately unordered and unequal, so
// DateTime gets PartialEq/PartialOrd but neither Eq nor Ord.

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        if self.is_aware() != other.is_aware() {
            return false;
        }

        self.comparison_key() == other.comparison_key()
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_aware() != other.is_aware() {
            return None;
        }

        Some(self.comparison_key().cmp(&other.comparison_key()))
    }
}


/// A **YMD** is an implementation detail of `Date`. It is the raw
/// unchecked (year, month, day) triple: the interface to `Date` makes
/// the 74th of March unrepresentable, but a `YMD` is free to hold it,
/// which is why it stays private to this crate.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy, Hash)]
pub(crate) struct YMD {
    pub year:  i64,
    pub month: Month,
    pub day:   i8,
}

impl YMD {

    /// Calculates the number of days between this date and the 1st
    /// January, 1970, after checking that the triple is valid.
    ///
    /// Validity and day-count need the same leap-year calculations, so
    /// doing them together means doing those only once.
    fn to_days_since_epoch(self) -> Result<i64, Error> {
        let (_, is_leap_year) = Year(self.year).leap_year_calculations();

        if !self.is_valid(is_leap_year) {
            return Err(Error::InvalidDate);
        }

        Ok(self.days_since_epoch_unchecked())
    }

    /// The day-count calculation itself, for triples already known to
    /// be valid.
    fn days_since_epoch_unchecked(self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Days from the start of 1970 to the start of 2000, then whole
        // years from 2000, then elapsed leap days, then whole months,
        // then this year's leap day if it is already behind us, then
        // days into the month (shifted to count from zero).
        years * 365
            + 10958
            + leap_days_elapsed
            + self.month.days_before_start() as i64
            + if is_leap_year && self.month >= March { 1 } else { 0 }
            + (self.day - 1) as i64
    }

    /// Whether the day is in the range allowed by the month.
    fn is_valid(self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

/// Computes the weekday given the number of days that have passed since
/// the internal reference point.
fn days_to_weekday(days: i64) -> Weekday {
    // The reference point, 1st March 2000, was a Wednesday: two days
    // past Monday.
    let weekday = (days + 2).rem_euclid(7);

    // Modulo 7 keeps the value within range.
    Weekday::from_monday_zero(weekday as i8).unwrap()
}

/// Splits a number of time periods into a number of complete cycles,
/// and the leftover periods that don’t fit into one.
///
/// This is division-with-remainder, except that a negative input gets
/// wrapped around into a positive remainder one cycle down.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


/// A month of the year, starting with January, and ending with December.
///
/// Stored as an enum instead of a number to prevent off-by-one errors:
/// here January is unambiguously month 1 when you use `as i8`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

/// All twelve months, in calendar order.
pub static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

impl Month {

    /// Returns the number of days in this month, depending on whether
    /// it’s a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before*
    /// this month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// The number of months between January and this month.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// The quarter this month falls in, from 1 to 4.
    pub fn quarter(self) -> i8 {
        (self as i8 - 1) / 3 + 1
    }

    /// The first month of the quarter this month falls in.
    pub fn quarter_start(self) -> Month {
        // The index stays within 0..12, so this cannot fail.
        Month::from_zero(((self as i8 - 1) / 3) * 3).unwrap()
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```
    /// use calendric::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::InvalidDate),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Self::from_one(month + 1)
    }
}


/// A named day of the week, Monday-first as ISO-8601 has it.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
}

/// All seven weekdays, Monday first.
pub static WEEKDAYS: [Weekday; 7] = [
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
];

// No Ord instance: there’s no one standard for whether Sunday precedes
// Monday, and the field is ignored when comparing dates anyway.

impl Weekday {

    /// The number of days this weekday lies after Monday, from 0 to 6.
    pub fn days_from_monday(self) -> i8 {
        match self {
            Monday   => 0,  Tuesday => 1,  Wednesday => 2,  Thursday => 3,
            Friday   => 4,  Saturday => 5,  Sunday => 6,
        }
    }

    /// Whether this weekday falls on the weekend rather than being a
    /// business day.
    pub fn is_weekend(self) -> bool {
        matches!(self, Saturday | Sunday)
    }

    /// Returns the weekday based on a number, with Monday as Day 0,
    /// Tuesday as Day 1, and so on.
    pub fn from_monday_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Monday,     1 => Tuesday,   2 => Wednesday,
            3 => Thursday,   4 => Friday,    5 => Saturday,
            6 => Sunday,     _ => return Err(Error::InvalidDate),
        })
    }
}

//! Strict ISO-8601 parsing, and the auto-detecting entry points.
//!
//! The strict grammar accepts `YYYY-MM-DD`, optionally followed by a
//! `T` or space separator, `HH:MM:SS`, an optional `.ffffff` fraction,
//! and an optional `Z` or `±HH:MM` offset. A datetime without an offset
//! resolves to UTC — a policy choice, not a guess. Anything else is
//! [`Error::MalformedIso`]; input in some other layout needs an
//! explicit pattern via `parse_pattern`, because auto-detection never
//! arbitrates between non-ISO candidates.

use std::str::FromStr;

use crate::cal::datetime::{Date, DateTime, Time};
use crate::cal::fmt::Pattern;
use crate::cal::offset::Offset;
use crate::error::Error;
use crate::locale::Locale;


impl Date {

    /// Parses a strict ISO-8601 date, `YYYY-MM-DD`.
    ///
    /// ```
    /// use calendric::{Date, Month};
    ///
    /// assert_eq!(Date::parse("2015-06-26").unwrap(),
    ///            Date::ymd(2015, Month::June, 26).unwrap());
    /// assert!(Date::parse("26/06/2015").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = IsoCursor::new(input);
        let date = cursor.date()?;
        cursor.finish()?;
        Ok(date)
    }

    /// Parses a date laid out by an explicit pattern, in the given
    /// locale.
    pub fn parse_pattern(input: &str, pattern: &Pattern, locale: &dyn Locale)
        -> Result<Self, Error>
    {
        pattern.parse(input, locale)?.into_date()
    }
}

impl DateTime {

    /// Parses a strict ISO-8601 datetime. A date alone reads as
    /// midnight; a missing offset reads as UTC.
    ///
    /// ```
    /// use calendric::DateTime;
    ///
    /// let parsed = DateTime::parse("2024-01-15T14:30:45+01:00").unwrap();
    /// assert_eq!(parsed, DateTime::parse("2024-01-15T13:30:45Z").unwrap());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = IsoCursor::new(input);
        let date = cursor.date()?;

        if cursor.at_end() {
            return Ok(Self::from_date(date, Some(Offset::utc())));
        }

        cursor.separator()?;
        let time = cursor.time()?;
        let offset = cursor.offset()?.unwrap_or_else(Offset::utc);
        cursor.finish()?;

        Ok(Self::new_with_offset(date, time, offset))
    }

    /// Parses a datetime laid out by an explicit pattern, in the given
    /// locale. The result is naive unless the pattern has an offset
    /// token.
    pub fn parse_pattern(input: &str, pattern: &Pattern, locale: &dyn Locale)
        -> Result<Self, Error>
    {
        pattern.parse(input, locale)?.into_datetime()
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


struct IsoCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> IsoCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn finish(&self) -> Result<(), Error> {
        if self.at_end() { Ok(()) } else { Err(Error::MalformedIso) }
    }

    fn digits(&mut self, count: usize) -> Result<i64, Error> {
        let rest = self.rest();
        if rest.len() < count || !rest[..count].iter().all(u8::is_ascii_digit) {
            return Err(Error::MalformedIso);
        }

        let parsed = self.input[self.pos .. self.pos + count].parse()
            .map_err(|_| Error::MalformedIso)?;
        self.pos += count;
        Ok(parsed)
    }

    fn byte(&mut self, wanted: u8) -> Result<(), Error> {
        if self.rest().first() == Some(&wanted) {
            self.pos += 1;
            Ok(())
        }
        else {
            Err(Error::MalformedIso)
        }
    }

    fn date(&mut self) -> Result<Date, Error> {
        // Proleptic years before year 0 keep the sign.
        let negative = self.rest().first() == Some(&b'-');
        if negative {
            self.pos += 1;
        }

        let year = self.digits(4)?;
        self.byte(b'-')?;
        let month = self.digits(2)?;
        self.byte(b'-')?;
        let day = self.digits(2)?;

        Date::ymd_number(if negative { -year } else { year }, month as i8, day as i8)
    }

    fn separator(&mut self) -> Result<(), Error> {
        match self.rest().first() {
            Some(&b'T') | Some(&b' ') => { self.pos += 1; Ok(()) }
            _ => Err(Error::MalformedIso),
        }
    }

    fn time(&mut self) -> Result<Time, Error> {
        let hour = self.digits(2)?;
        self.byte(b':')?;
        let minute = self.digits(2)?;
        self.byte(b':')?;
        let second = self.digits(2)?;

        let microsecond = if self.rest().first() == Some(&b'.') {
            self.pos += 1;
            self.fraction()?
        }
        else {
            0
        };

        Time::hms_micro(hour as i8, minute as i8, second as i8, microsecond)
    }

    /// One to six fraction digits, scaled up to microseconds.
    fn fraction(&mut self) -> Result<i32, Error> {
        let start = self.pos;
        while matches!(self.rest().first(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }

        let len = self.pos - start;
        if len == 0 || len > 6 {
            return Err(Error::MalformedIso);
        }

        let digits: i32 = self.input[start..self.pos].parse()
            .map_err(|_| Error::MalformedIso)?;
        Ok(digits * 10i32.pow(6 - len as u32))
    }

    fn offset(&mut self) -> Result<Option<Offset>, Error> {
        let sign = match self.rest().first() {
            Some(&b'Z') => {
                self.pos += 1;
                return Ok(Some(Offset::utc()));
            }
            Some(&b'+') => 1,
            Some(&b'-') => -1,
            _ => return Ok(None),
        };
        self.pos += 1;

        let hours = self.digits(2)?;
        self.byte(b':')?;
        let minutes = self.digits(2)?;

        Offset::of_seconds(sign * (hours as i32 * 3600 + minutes as i32 * 60))
            .map(Some)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;
    use crate::cal::fmt::ISO;

    #[test]
    fn date_only() {
        assert_eq!(Date::parse("2024-01-15").unwrap(),
                   Date::ymd(2024, Month::January, 15).unwrap());
    }

    #[test]
    fn negative_year() {
        assert_eq!(Date::parse("-0753-12-01").unwrap(),
                   Date::ymd(-753, Month::December, 1).unwrap());
    }

    #[test]
    fn datetime_with_offset_is_an_instant() {
        let parsed = DateTime::parse("2024-01-15T14:30:45+01:00").unwrap();
        assert_eq!(parsed.instant(),
                   DateTime::parse("2024-01-15T13:30:45Z").unwrap().instant());
    }

    #[test]
    fn missing_offset_reads_as_utc() {
        let parsed = DateTime::parse("2025-09-23T14:30:45").unwrap();
        assert_eq!(parsed.offset(), Some(Offset::utc()));
    }

    #[test]
    fn space_separator() {
        assert_eq!(DateTime::parse("2025-09-23 14:30:45").unwrap(),
                   DateTime::parse("2025-09-23T14:30:45").unwrap());
    }

    #[test]
    fn date_only_reads_as_midnight() {
        let parsed = DateTime::parse("2025-09-23").unwrap();
        assert_eq!(parsed.time().to_seconds(), 0);
    }

    #[test]
    fn fractional_seconds() {
        let parsed = DateTime::parse("2024-01-15T14:30:45.5Z").unwrap();
        assert_eq!(parsed.time().to_iso_string(), "14:30:45.500000");
        assert_eq!(parsed.iso().to_string(), "2024-01-15T14:30:45.500000Z");
    }

    mod malformed {
        use super::*;

        fn rejects(input: &str) {
            assert_eq!(DateTime::parse(input), Err(Error::MalformedIso));
        }

        #[test] fn empty() { rejects(""); }
        #[test] fn slashes() { rejects("2024/01/15"); }
        #[test] fn single_digit_month() { rejects("2024-1-15"); }
        #[test] fn no_seconds() { rejects("2024-01-15T14:30"); }
        #[test] fn bad_separator() { rejects("2024-01-15@14:30:45"); }
        #[test] fn offset_without_colon() { rejects("2024-01-15T14:30:45+0100"); }
        #[test] fn trailing_garbage() { rejects("2024-01-15T14:30:45Z!"); }
        #[test] fn seven_fraction_digits() { rejects("2024-01-15T14:30:45.1234567Z"); }
    }

    #[test]
    fn impossible_dates_are_invalid_not_malformed() {
        assert_eq!(Date::parse("2023-02-30"), Err(Error::InvalidDate));
    }

    #[test]
    fn impossible_times_are_invalid_not_malformed() {
        assert_eq!(DateTime::parse("2023-02-03T25:00:00"), Err(Error::InvalidTime));
    }
}

//! The token grammar shared by the formatter and the explicit-pattern
//! parser.
//!
//! A format string is a run of single-letter tokens mixed with literal
//! text; a backslash escapes the next character so token letters can
//! appear as output. The string compiles once into a list of fields —
//! a closed alphabet, so every token is handled by an exhaustive match
//! — and the same compiled pattern drives both directions: fields to
//! text, and text back to fields.

pub mod iso;

pub use self::iso::ISO;

use crate::cal::datetime::{Date, DateTime, Month, Time, MONTHS, WEEKDAYS};
use crate::cal::offset::Offset;
use crate::cal::{DatePiece, TimePiece};
use crate::error::Error;
use crate::locale::Locale;


/// One element of a compiled pattern: a literal character, or one
/// calendar, clock, or zone field with its print form.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field {
    Literal(char),

    /// `Y` — four-digit zero-padded year.
    Year,
    /// `y` — two-digit year of century.
    YearOfCentury,
    /// `m` — zero-padded month, `01`–`12`.
    MonthZero,
    /// `n` — month without padding, `1`–`12`.
    MonthNumber,
    /// `F` — full month name from the locale.
    MonthNameLong,
    /// `M` — short month name from the locale.
    MonthNameShort,
    /// `d` — zero-padded day, `01`–`31`.
    DayZero,
    /// `j` — day without padding, `1`–`31`.
    DayNumber,
    /// `l` — full weekday name from the locale.
    WeekdayNameLong,
    /// `D` — short weekday name from the locale.
    WeekdayNameShort,
    /// `H` — zero-padded 24-hour clock hour.
    Hour24Zero,
    /// `G` — 24-hour clock hour without padding.
    Hour24,
    /// `h` — zero-padded 12-hour clock hour.
    Hour12Zero,
    /// `g` — 12-hour clock hour without padding.
    Hour12,
    /// `i` — zero-padded minute.
    MinuteZero,
    /// `s` — zero-padded second.
    SecondZero,
    /// `u` — six-digit microsecond.
    Microseconds,
    /// `v` — three-digit millisecond.
    Milliseconds,
    /// `A` — uppercase meridiem, `AM`/`PM`.
    MeridiemUpper,
    /// `a` — lowercase meridiem, `am`/`pm`.
    MeridiemLower,
    /// `e` — zone name as supplied by the caller; format-only.
    ZoneName,
    /// `O` — offset without a colon, `+0200`.
    OffsetBasic,
    /// `P` — offset with a colon, `+02:00`.
    OffsetColon,
    /// `Z` — offset as a signed count of seconds.
    OffsetSeconds,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'Y' => Field::Year,
            'y' => Field::YearOfCentury,
            'm' => Field::MonthZero,
            'n' => Field::MonthNumber,
            'F' => Field::MonthNameLong,
            'M' => Field::MonthNameShort,
            'd' => Field::DayZero,
            'j' => Field::DayNumber,
            'l' => Field::WeekdayNameLong,
            'D' => Field::WeekdayNameShort,
            'H' => Field::Hour24Zero,
            'G' => Field::Hour24,
            'h' => Field::Hour12Zero,
            'g' => Field::Hour12,
            'i' => Field::MinuteZero,
            's' => Field::SecondZero,
            'u' => Field::Microseconds,
            'v' => Field::Milliseconds,
            'A' => Field::MeridiemUpper,
            'a' => Field::MeridiemLower,
            'e' => Field::ZoneName,
            'O' => Field::OffsetBasic,
            'P' => Field::OffsetColon,
            'Z' => Field::OffsetSeconds,
            _   => return None,
        })
    }

    /// What the parser announces when input deviates at this field.
    fn expectation(self) -> &'static str {
        match self {
            Field::Literal(_)       => "literal text",
            Field::Year             => "four-digit year",
            Field::YearOfCentury    => "two-digit year",
            Field::MonthZero        => "two-digit month",
            Field::MonthNumber      => "month number",
            Field::MonthNameLong    => "month name",
            Field::MonthNameShort   => "short month name",
            Field::DayZero          => "two-digit day",
            Field::DayNumber        => "day number",
            Field::WeekdayNameLong  => "weekday name",
            Field::WeekdayNameShort => "short weekday name",
            Field::Hour24Zero       => "two-digit hour",
            Field::Hour24           => "hour",
            Field::Hour12Zero       => "two-digit clock hour",
            Field::Hour12           => "clock hour",
            Field::MinuteZero       => "two-digit minute",
            Field::SecondZero       => "two-digit second",
            Field::Microseconds     => "six-digit microsecond",
            Field::Milliseconds     => "three-digit millisecond",
            Field::MeridiemUpper    => "AM or PM",
            Field::MeridiemLower    => "am or pm",
            Field::ZoneName         => "zone name",
            Field::OffsetBasic      => "offset like +0200",
            Field::OffsetColon      => "offset like +02:00",
            Field::OffsetSeconds    => "offset in seconds",
        }
    }
}


/// A compiled format string.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Pattern {
    fields: Vec<Field>,
}

impl Pattern {

    /// Compiles a format string. Compilation is total: token letters
    /// become fields, a backslash makes the next character literal, and
    /// everything else passes through as literal text.
    ///
    /// ```
    /// use calendric::Pattern;
    ///
    /// let pattern = Pattern::compile(r"Y-m-d \a\t H:i");
    /// assert_eq!(pattern.fields().len(), 12);
    /// ```
    pub fn compile(input: &str) -> Self {
        let mut fields = Vec::new();
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            if c == '\\' {
                // A trailing backslash escapes nothing and stays.
                match chars.next() {
                    Some(escaped) => fields.push(Field::Literal(escaped)),
                    None          => fields.push(Field::Literal('\\')),
                }
                continue;
            }

            match Field::from_letter(c) {
                Some(field) => fields.push(field),
                None        => fields.push(Field::Literal(c)),
            }
        }

        Self { fields }
    }

    /// The compiled fields, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Renders a datetime through this pattern. Formatting a valid
    /// value never fails.
    pub fn format(&self, when: &DateTime, locale: &dyn Locale) -> String {
        self.format_with_zone(when, locale, None)
    }

    /// Renders a datetime through this pattern, with a zone name for
    /// the `e` token to print. The value itself only carries an offset;
    /// the name, if wanted, comes from the caller who knows it.
    pub fn format_with_zone(&self, when: &DateTime, locale: &dyn Locale,
                            zone_name: Option<&str>) -> String {
        use std::fmt::Write;

        let mut out = String::with_capacity(self.fields.len() * 2);
        let offset = when.offset().unwrap_or_else(Offset::utc);

        for field in &self.fields {
            // Writing to a String cannot fail.
            let _ = match *field {
                Field::Literal(c)       => { out.push(c); Ok(()) }

                Field::Year             => write!(out, "{:04}", when.year()),
                Field::YearOfCentury    => write!(out, "{:02}", when.year_of_century()),
                Field::MonthZero        => write!(out, "{:02}", when.month() as i8),
                Field::MonthNumber      => write!(out, "{}", when.month() as i8),
                Field::MonthNameLong    => write!(out, "{}", locale.long_month_name(when.month())),
                Field::MonthNameShort   => write!(out, "{}", locale.short_month_name(when.month())),
                Field::DayZero          => write!(out, "{:02}", when.day()),
                Field::DayNumber        => write!(out, "{}", when.day()),
                Field::WeekdayNameLong  => write!(out, "{}", locale.long_day_name(when.weekday())),
                Field::WeekdayNameShort => write!(out, "{}", locale.short_day_name(when.weekday())),
                Field::Hour24Zero       => write!(out, "{:02}", when.hour()),
                Field::Hour24           => write!(out, "{}", when.hour()),
                Field::Hour12Zero       => write!(out, "{:02}", clock_hour(when.hour())),
                Field::Hour12           => write!(out, "{}", clock_hour(when.hour())),
                Field::MinuteZero       => write!(out, "{:02}", when.minute()),
                Field::SecondZero       => write!(out, "{:02}", when.second()),
                Field::Microseconds     => write!(out, "{:06}", when.microsecond()),
                Field::Milliseconds     => write!(out, "{:03}", when.microsecond() / 1000),
                Field::MeridiemUpper    => { out.push_str(if when.hour() < 12 { "AM" } else { "PM" }); Ok(()) }
                Field::MeridiemLower    => { out.push_str(if when.hour() < 12 { "am" } else { "pm" }); Ok(()) }
                Field::ZoneName         => { out.push_str(zone_name.unwrap_or("")); Ok(()) }
                Field::OffsetBasic      => write!(out, "{}{:02}{:02}",
                                                  offset_sign(offset),
                                                  offset.hours().abs(),
                                                  offset.minutes().abs()),
                Field::OffsetColon      => write!(out, "{}{:02}:{:02}",
                                                  offset_sign(offset),
                                                  offset.hours().abs(),
                                                  offset.minutes().abs()),
                Field::OffsetSeconds    => write!(out, "{}", offset.seconds()),
            };
        }

        out
    }

    /// Runs this pattern over input text, consuming one bounded run of
    /// characters per field, and collecting the fields it finds. Any
    /// deviation reports the byte offset it happened at and what the
    /// pattern expected there.
    pub fn parse(&self, input: &str, locale: &dyn Locale) -> Result<FieldAccumulator, Error> {
        let mut cursor = ParseCursor { input, pos: 0 };
        let mut found = FieldAccumulator::default();

        for field in &self.fields {
            cursor.take_field(*field, locale, &mut found)?;
        }

        if cursor.pos != input.len() {
            return Err(Error::PatternMismatch { offset: cursor.pos, expected: "end of input" });
        }

        Ok(found)
    }
}


/// The hour on a 12-hour clock face: midnight and noon both read 12.
fn clock_hour(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn offset_sign(offset: Offset) -> char {
    if offset.is_negative() { '-' } else { '+' }
}


/// The fields recovered by running a pattern over input text, waiting
/// to be assembled into a value.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct FieldAccumulator {
    year: Option<i64>,
    month: Option<Month>,
    day: Option<i8>,
    hour24: Option<i8>,
    hour12: Option<i8>,
    minute: Option<i8>,
    second: Option<i8>,
    microsecond: Option<i32>,
    meridiem_pm: Option<bool>,
    offset_seconds: Option<i32>,
}

impl FieldAccumulator {

    /// Assembles a date. The pattern must have supplied a year, a
    /// month, and a day; the values go through the same range checks as
    /// direct construction.
    pub fn into_date(self) -> Result<Date, Error> {
        let year = self.year.ok_or(Error::BadPattern { reason: "pattern has no year field" })?;
        let month = self.month.ok_or(Error::BadPattern { reason: "pattern has no month field" })?;
        let day = self.day.ok_or(Error::BadPattern { reason: "pattern has no day field" })?;

        Date::ymd(year, month, day)
    }

    /// Assembles a datetime: the date fields are required, missing time
    /// fields default to midnight, and a parsed offset makes the result
    /// aware.
    pub fn into_datetime(self) -> Result<DateTime, Error> {
        let date = self.into_date()?;
        let time = Time::hms_micro(self.assemble_hour(),
                                   self.minute.unwrap_or(0),
                                   self.second.unwrap_or(0),
                                   self.microsecond.unwrap_or(0))?;

        let naive = DateTime::new(date, time);
        match self.offset_seconds {
            Some(seconds) => Ok(naive.with_offset(Offset::of_seconds(seconds)?)),
            None          => Ok(naive),
        }
    }

    fn assemble_hour(&self) -> i8 {
        if let Some(hour) = self.hour24 {
            return hour;
        }

        match (self.hour12, self.meridiem_pm) {
            (Some(12), Some(false)) => 0,
            (Some(12), Some(true))  => 12,
            (Some(h),  Some(true))  => h + 12,
            (Some(h),  _)           => h,
            (None,     _)           => 0,
        }
    }
}


struct ParseCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ParseCursor<'a> {

    fn mismatch(&self, field: Field) -> Error {
        Error::PatternMismatch { offset: self.pos, expected: field.expectation() }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consumes an exact run of digits.
    fn digits(&mut self, count: usize, field: Field) -> Result<i64, Error> {
        let rest = self.rest().as_bytes();
        if rest.len() < count || !rest[..count].iter().all(u8::is_ascii_digit) {
            return Err(self.mismatch(field));
        }

        let parsed = self.input[self.pos .. self.pos + count].parse()
            .map_err(|_| self.mismatch(field))?;
        self.pos += count;
        Ok(parsed)
    }

    /// Consumes one or two digits — the unpadded numeric tokens.
    fn short_digits(&mut self, field: Field) -> Result<i64, Error> {
        let rest = self.rest().as_bytes();
        let len = rest.iter().take(2).take_while(|b| b.is_ascii_digit()).count();
        if len == 0 {
            return Err(self.mismatch(field));
        }

        let parsed = self.input[self.pos .. self.pos + len].parse()
            .map_err(|_| self.mismatch(field))?;
        self.pos += len;
        Ok(parsed)
    }

    /// Consumes the longest name in the table that prefixes the input,
    /// returning its index.
    fn name_from<'n>(&mut self, names: impl Iterator<Item = (usize, &'n str)>, field: Field)
        -> Result<usize, Error>
    {
        let mut best: Option<(usize, usize)> = None;

        for (index, name) in names {
            if self.rest().starts_with(name)
            && best.map_or(true, |(_, len)| name.len() > len) {
                best = Some((index, name.len()));
            }
        }

        match best {
            Some((index, len)) => { self.pos += len; Ok(index) }
            None               => Err(self.mismatch(field)),
        }
    }

    fn literal(&mut self, c: char, field: Field) -> Result<(), Error> {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            Ok(())
        }
        else {
            Err(self.mismatch(field))
        }
    }

    fn take_field(&mut self, field: Field, locale: &dyn Locale, found: &mut FieldAccumulator)
        -> Result<(), Error>
    {
        match field {
            Field::Literal(c) => self.literal(c, field)?,

            Field::Year => found.year = Some(self.digits(4, field)?),
            Field::YearOfCentury => {
                // Two-digit years pivot at 69, the way strptime pivots.
                let year = self.digits(2, field)?;
                found.year = Some(if year <= 68 { 2000 + year } else { 1900 + year });
            }

            Field::MonthZero   => found.month = Some(month_from(self.digits(2, field)?, self.pos, field)?),
            Field::MonthNumber => found.month = Some(month_from(self.short_digits(field)?, self.pos, field)?),
            Field::MonthNameLong => {
                let index = self.name_from(
                    MONTHS.iter().enumerate().map(|(i, &m)| (i, locale.long_month_name(m))),
                    field)?;
                found.month = Some(MONTHS[index]);
            }
            Field::MonthNameShort => {
                let index = self.name_from(
                    MONTHS.iter().enumerate().map(|(i, &m)| (i, locale.short_month_name(m))),
                    field)?;
                found.month = Some(MONTHS[index]);
            }

            Field::DayZero   => found.day = Some(self.digits(2, field)? as i8),
            Field::DayNumber => found.day = Some(self.short_digits(field)? as i8),

            // Weekday names are consumed but contribute nothing: the
            // date fields alone determine the weekday.
            Field::WeekdayNameLong => {
                let _ = self.name_from(
                    WEEKDAYS.iter().enumerate().map(|(i, &d)| (i, locale.long_day_name(d))),
                    field)?;
            }
            Field::WeekdayNameShort => {
                let _ = self.name_from(
                    WEEKDAYS.iter().enumerate().map(|(i, &d)| (i, locale.short_day_name(d))),
                    field)?;
            }

            Field::Hour24Zero => found.hour24 = Some(self.digits(2, field)? as i8),
            Field::Hour24     => found.hour24 = Some(self.short_digits(field)? as i8),
            Field::Hour12Zero => found.hour12 = Some(self.digits(2, field)? as i8),
            Field::Hour12     => found.hour12 = Some(self.short_digits(field)? as i8),
            Field::MinuteZero => found.minute = Some(self.digits(2, field)? as i8),
            Field::SecondZero => found.second = Some(self.digits(2, field)? as i8),

            Field::Microseconds => found.microsecond = Some(self.digits(6, field)? as i32),
            Field::Milliseconds => found.microsecond = Some(self.digits(3, field)? as i32 * 1000),

            Field::MeridiemUpper => {
                let index = self.name_from([(0, "AM"), (1, "PM")].into_iter(), field)?;
                found.meridiem_pm = Some(index == 1);
            }
            Field::MeridiemLower => {
                let index = self.name_from([(0, "am"), (1, "pm")].into_iter(), field)?;
                found.meridiem_pm = Some(index == 1);
            }

            // A zone name in the input has no bounded width and no
            // reverse mapping to an offset; the token is lossy and
            // cannot drive a parse.
            Field::ZoneName => {
                return Err(Error::BadPattern { reason: "the zone name token cannot be parsed" });
            }

            Field::OffsetBasic => {
                let sign = self.offset_sign(field)?;
                let hours = self.digits(2, field)?;
                let minutes = self.digits(2, field)?;
                found.offset_seconds = Some(sign * (hours * 3600 + minutes * 60) as i32);
            }
            Field::OffsetColon => {
                if self.rest().starts_with('Z') {
                    self.pos += 1;
                    found.offset_seconds = Some(0);
                }
                else {
                    let sign = self.offset_sign(field)?;
                    let hours = self.digits(2, field)?;
                    self.literal(':', field)?;
                    let minutes = self.digits(2, field)?;
                    found.offset_seconds = Some(sign * (hours * 3600 + minutes * 60) as i32);
                }
            }
            Field::OffsetSeconds => {
                let sign = match self.rest().as_bytes().first() {
                    Some(b'-') => { self.pos += 1; -1 }
                    Some(b'+') => { self.pos += 1; 1 }
                    _ => 1,
                };
                let start = self.pos;
                while matches!(self.rest().as_bytes().first(), Some(b) if b.is_ascii_digit()) {
                    self.pos += 1;
                }
                if self.pos == start {
                    return Err(self.mismatch(field));
                }
                let seconds: i32 = self.input[start..self.pos].parse()
                    .map_err(|_| self.mismatch(field))?;
                found.offset_seconds = Some(sign * seconds);
            }
        }

        Ok(())
    }

    fn offset_sign(&mut self, field: Field) -> Result<i32, Error> {
        match self.rest().as_bytes().first() {
            Some(b'+') => { self.pos += 1; Ok(1) }
            Some(b'-') => { self.pos += 1; Ok(-1) }
            _ => Err(self.mismatch(field)),
        }
    }
}

fn month_from(number: i64, offset: usize, field: Field) -> Result<Month, Error> {
    Month::from_one(number as i8)
        .map_err(|_| Error::PatternMismatch { offset, expected: field.expectation() })
}


impl DateTime {

    /// Renders this datetime through a compiled pattern.
    pub fn format(&self, pattern: &Pattern, locale: &dyn Locale) -> String {
        pattern.format(self, locale)
    }
}

impl Date {

    /// Renders this date through a compiled pattern. Time and offset
    /// tokens see midnight UTC.
    pub fn format(&self, pattern: &Pattern, locale: &dyn Locale) -> String {
        pattern.format(&DateTime::from_date(*self, None), locale)
    }
}

//! Canonical ISO-8601 renderings of the value types.
//!
//! Values don’t implement `Display` directly: the `iso` method wraps a
//! value in a view that does, so writing `date.iso()` says which text
//! form you are getting.

use std::fmt;

use crate::cal::datetime::{Date, DateTime, Time};
use crate::cal::offset::Offset;
use crate::cal::{DatePiece, TimePiece};


/// Conversion into the canonical ISO-8601 text form.
pub trait ISO: Sized {

    /// A displayable ISO-8601 view of this value.
    fn iso(&self) -> Iso<'_, Self> {
        Iso(self)
    }
}

/// A borrowed view of a value that displays as ISO-8601 text.
#[derive(Debug, Clone, Copy)]
pub struct Iso<'a, T>(&'a T);

impl ISO for Date {}
impl ISO for Time {}
impl ISO for DateTime {}
impl ISO for Offset {}


impl fmt::Display for Iso<'_, Date> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;

        // Years outside 0..9999 take the expanded representation with
        // an explicit sign.
        if (0..=9999).contains(&date.year()) {
            write!(f, "{:04}-{:02}-{:02}", date.year(), date.month() as i8, date.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", date.year(), date.month() as i8, date.day())
        }
    }
}

impl fmt::Display for Iso<'_, Time> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.0;
        write!(f, "{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())?;

        if time.microsecond() != 0 {
            write!(f, ".{:06}", time.microsecond())?;
        }

        Ok(())
    }
}

impl fmt::Display for Iso<'_, DateTime> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.0.date().iso(), self.0.time().iso())?;

        if let Some(offset) = self.0.offset() {
            write!(f, "{}", offset.iso())?;
        }

        Ok(())
    }
}

impl fmt::Display for Iso<'_, Offset> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = *self.0;

        if offset.is_utc() {
            return f.write_str("Z");
        }

        let sign = if offset.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, offset.hours().abs(), offset.minutes().abs())?;

        // The zoneinfo database has historical sub-minute offsets;
        // they get the rare three-part form.
        if offset.subminute_seconds() != 0 {
            write!(f, ":{:02}", offset.subminute_seconds().abs())?;
        }

        Ok(())
    }
}


impl Date {

    /// This date as ISO-8601 text, `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.iso().to_string()
    }
}

impl Time {

    /// This time as ISO-8601 text, `HH:MM:SS[.ffffff]`.
    pub fn to_iso_string(&self) -> String {
        self.iso().to_string()
    }
}

impl DateTime {

    /// This datetime as ISO-8601 text: naive values render their local
    /// fields alone, aware values append `Z` or the `±HH:MM` offset.
    pub fn to_iso_string(&self) -> String {
        self.iso().to_string()
    }
}

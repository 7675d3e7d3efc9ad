//! Fixed offsets from UTC.

use std::fmt;

use crate::cal::fmt::ISO;
use crate::error::Error;
use crate::util::RangeExt;


/// A fixed **offset** from UTC, stored as a signed number of seconds.
///
/// An aware [`DateTime`](crate::DateTime) carries one of these to pin
/// its local fields to an instant. An offset of zero reads, and prints,
/// as UTC.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct Offset {
    seconds: i32,
}

impl Offset {

    /// The UTC offset: zero seconds.
    pub fn utc() -> Self {
        Self { seconds: 0 }
    }

    /// Creates an offset of the given number of seconds, which must be
    /// within ±24 hours.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400 .. 86401) {
            Ok(Self { seconds })
        }
        else {
            Err(Error::InvalidOffset)
        }
    }

    /// Creates an offset of the given number of hours and minutes,
    /// which must agree in sign and be within range.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::OffsetSignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::InvalidOffset)
        }
        else {
            Self::of_seconds(hours as i32 * 3600 + minutes as i32 * 60)
        }
    }

    /// The total offset in seconds.
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Whether this is the zero offset.
    pub fn is_utc(self) -> bool {
        self.seconds == 0
    }

    /// Whether this offset lies west of the meridian.
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// The whole-hours part of the offset.
    pub fn hours(self) -> i8 {
        (self.seconds / 3600) as i8
    }

    /// The minutes-past-the-hour part of the offset.
    pub fn minutes(self) -> i8 {
        (self.seconds / 60 % 60) as i8
    }

    /// The seconds-past-the-minute part of the offset. Zero for every
    /// modern zone, but the zoneinfo database has historical entries
    /// with sub-minute offsets.
    pub fn subminute_seconds(self) -> i8 {
        (self.seconds % 60) as i8
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset({})", self.iso())
    }
}

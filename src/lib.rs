#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar and time values: immutable dates, datetimes, durations, and
//! intervals, with calendar arithmetic, anchored boundaries, ISO-8601
//! and token-pattern formatting and parsing, and locale-aware
//! humanization.
//!
//! # Examples
//!
//! ```
//! use calendric::{Date, DateTime, Duration, Month, Unit};
//!
//! let date = Date::parse("2015-06-26").unwrap();
//! assert_eq!(date.start_of(Unit::Month).unwrap(),
//!            Date::ymd(2015, Month::June, 1).unwrap());
//!
//! let when = DateTime::parse("2001-02-03T04:05:06+07:00").unwrap();
//! assert!(when.is_aware());
//!
//! let gap = Duration::parse_iso("P1Y2M3DT4H5M6S").unwrap();
//! assert_eq!(gap.to_iso_string(), "P1Y2M3DT4H5M6S");
//! ```

pub mod adapter;
pub mod cal;
pub mod duration;
pub mod error;
pub mod instant;
pub mod interval;
pub mod locale;
pub mod period;
mod humanize;
mod system;
mod util;

pub use crate::adapter::TextValue;
pub use crate::cal::datetime::{Date, DateTime, Month, Time, Weekday, Year, MONTHS, WEEKDAYS};
pub use crate::cal::fmt::{Field, Pattern, ISO};
pub use crate::cal::offset::Offset;
pub use crate::cal::zone::{FixedTimespan, FixedTimespanZone, FixedZoneTable, ZoneInfo, ZoneResolver};
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::duration::Duration;
pub use crate::error::Error;
pub use crate::instant::Instant;
pub use crate::interval::{Interval, TimePoint};
pub use crate::locale::{EnglishLocale, Locale, LocaleRegistry, PluralCategory, PolishLocale};
pub use crate::period::{Period, Unit};

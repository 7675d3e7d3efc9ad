//! The one error type for everything that can go wrong while
//! constructing or parsing a calendar value.

use crate::period::Unit;


/// Every fallible operation in this crate reports one of these
/// conditions. Parsing and construction either produce a valid value or
/// one of them; nothing is ever silently downgraded to a default.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum Error {

    /// A (year, month, day) combination that does not exist in the
    /// proleptic Gregorian calendar, such as February the 30th.
    #[error("invalid calendar date")]
    InvalidDate,

    /// A time-of-day field out of its range.
    #[error("time field out of range")]
    InvalidTime,

    /// A UTC offset beyond ±24 hours.
    #[error("utc offset out of range")]
    InvalidOffset,

    /// An offset given as hours and minutes whose signs disagree.
    #[error("offset sign mismatch")]
    OffsetSignMismatch,

    /// Input that strict ISO-8601 parsing could not accept.
    #[error("malformed ISO-8601 date or time")]
    MalformedIso,

    /// Explicit-pattern parsing hit input that deviates from the
    /// pattern. Carries the byte offset of the deviation and a
    /// description of what the pattern expected there.
    #[error("pattern mismatch at byte {offset}: expected {expected}")]
    PatternMismatch { offset: usize, expected: &'static str },

    /// A pattern that cannot drive the requested parse, such as one
    /// with no year token when a date is wanted.
    #[error("unusable pattern: {reason}")]
    BadPattern { reason: &'static str },

    /// Input that the ISO-8601 duration grammar could not accept.
    /// Carries the offending substring.
    #[error("malformed ISO-8601 duration: {input:?}")]
    MalformedDuration { input: String },

    /// A time-of-day unit applied to a date-only value.
    #[error("{unit:?} is finer than a date-only value can carry")]
    UnsupportedGranularity { unit: Unit },

    /// Naive and aware values mixed in one operation.
    #[error("mixed naive and aware datetime values")]
    TimezoneMismatch,

    /// A zone name the resolver does not know.
    #[error("unknown time zone {name:?}")]
    UnknownZone { name: String },

    /// An interval whose start lies after its end.
    #[error("interval start is after its end")]
    InvalidInterval,

    /// Interval union of two ranges that neither overlap nor touch;
    /// the caller has to keep the pair instead.
    #[error("intervals neither overlap nor touch")]
    DisjointIntervals,

    /// A language tag with no registered locale.
    #[error("no locale registered for tag {tag:?}")]
    UnsupportedLocale { tag: String },
}

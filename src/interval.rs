//! Half-open intervals over pairs of dates or datetimes.
//!
//! An interval runs from its start, inclusive, to its end, exclusive;
//! equal endpoints denote the empty interval. Both endpoints must be
//! the same kind of point, and for datetimes the same awareness —
//! mixing a naive and an aware endpoint fails at construction, never
//! silently. A plain `Date` endpoint can join a datetime interval by
//! expanding to the start of its calendar day first, via
//! [`DateTime::from_date`].

use std::cmp::Ordering;

use crate::cal::datetime::{Date, DateTime};
use crate::duration::Duration;
use crate::error::Error;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Date {}
    impl Sealed for super::DateTime {}
}

/// A point a half-open interval can run between: a [`Date`] or a
/// [`DateTime`]. This trait is sealed; the two implementations are the
/// whole set.
pub trait TimePoint: sealed::Sealed + PartialOrd + Copy {

    /// Whether two points are comparable at all. Dates always are;
    /// datetimes have to agree on awareness.
    fn consistent_with(&self, other: &Self) -> bool;

    /// The exact time from an earlier point to this one. Callers
    /// guarantee the two points are consistent.
    fn since(&self, earlier: &Self) -> Duration;
}

impl TimePoint for Date {
    fn consistent_with(&self, _other: &Self) -> bool {
        true
    }

    fn since(&self, earlier: &Self) -> Duration {
        self.diff(*earlier)
    }
}

impl TimePoint for DateTime {
    fn consistent_with(&self, other: &Self) -> bool {
        self.is_aware() == other.is_aware()
    }

    fn since(&self, earlier: &Self) -> Duration {
        // Consistency was checked at interval construction, so the
        // mixed-awareness error cannot happen here.
        self.diff(*earlier).unwrap()
    }
}


/// A half-open span between two points of the same kind: the start is
/// inside, the end is not.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Interval<P: TimePoint> {
    start: P,
    end: P,
}

impl<P: TimePoint> Interval<P> {

    /// Creates an interval from its two endpoints.
    ///
    /// The start must not lie after the end, and datetime endpoints
    /// must agree on awareness; an interval over inconsistent endpoints
    /// would compare by accident, so it cannot be built at all.
    ///
    /// ```
    /// use calendric::{Date, Interval, Month};
    ///
    /// let jan = Interval::new(Date::ymd(2024, Month::January, 1).unwrap(),
    ///                         Date::ymd(2024, Month::February, 1).unwrap()).unwrap();
    /// assert!(!jan.is_empty());
    /// ```
    pub fn new(start: P, end: P) -> Result<Self, Error> {
        if !start.consistent_with(&end) {
            return Err(Error::TimezoneMismatch);
        }

        match start.partial_cmp(&end) {
            Some(Ordering::Greater) => Err(Error::InvalidInterval),
            Some(_)                 => Ok(Self { start, end }),

            // Consistent points always compare; aware datetimes in
            // different zones compare on the instant line.
            None => Err(Error::TimezoneMismatch),
        }
    }

    /// The inclusive start of this interval.
    pub fn start(&self) -> P {
        self.start
    }

    /// The exclusive end of this interval.
    pub fn end(&self) -> P {
        self.end
    }

    /// Whether this interval contains no points at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the point lies inside this interval: on or after the
    /// start, and strictly before the end.
    pub fn contains(&self, point: &P) -> bool {
        self.start <= *point && *point < self.end
    }

    /// Whether the other interval lies entirely within this one.
    /// An interval encloses itself, and every interval encloses an
    /// empty one positioned inside it.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether the two intervals share any point. Touching endpoints do
    /// not count: the shared endpoint belongs to one interval only.
    /// Symmetric, so `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether one interval ends exactly where the other starts.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// The largest interval inside both of these, or `None` when they
    /// share no points. No intersection is an answer, not an error.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if other.start > self.start { other.start } else { self.start };
        let end = if other.end < self.end { other.end } else { self.end };

        if start < end {
            Some(Self { start, end })
        }
        else {
            None
        }
    }

    /// The single interval covering both of these. Only overlapping or
    /// adjacent intervals merge into one; for anything else the answer
    /// would have a hole in it, so the caller is told to keep the pair
    /// instead.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        if !self.start.consistent_with(&other.start) {
            return Err(Error::TimezoneMismatch);
        }

        if !self.overlaps(other) && !self.is_adjacent_to(other) {
            return Err(Error::DisjointIntervals);
        }

        let start = if other.start < self.start { other.start } else { self.start };
        let end = if other.end > self.end { other.end } else { self.end };
        Ok(Self { start, end })
    }

    /// The exact time between the two endpoints.
    pub fn duration(&self) -> Duration {
        self.end.since(&self.start)
    }
}

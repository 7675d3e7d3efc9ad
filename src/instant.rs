//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with microsecond precision.
///
/// Internally, this is a 64-bit count of seconds since the Unix epoch and
/// a 32-bit microsecond-of-second.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    microseconds: i32,
}

impl Instant {

    /// Creates a new instant set to the given number of seconds since
    /// the Unix epoch, and zero microseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_micro(seconds, 0)
    }

    /// Creates a new instant set to the given number of seconds since
    /// the Unix epoch, along with the microsecond of that second.
    pub fn at_micro(seconds: i64, microseconds: i32) -> Self {
        Self { seconds, microseconds }
    }

    /// Creates a new instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, microseconds) = unsafe { sys_time() };
        Self { seconds, microseconds }
    }

    /// Creates a new instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// The number of whole seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The microsecond of the current second.
    pub fn microseconds(&self) -> i32 {
        self.microseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}µs)", self.seconds, self.microseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let total = self.seconds as i128 * 1_000_000 + self.microseconds as i128
                  + duration.whole_seconds() as i128 * 1_000_000
                  + duration.subsec_microseconds() as i128;
        split_micros(total)
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + (-duration)
    }
}

/// Splits a total microsecond count into an instant, flooring so the
/// microsecond field is always 0..1_000_000.
fn split_micros(total: i128) -> Instant {
    let seconds = total.div_euclid(1_000_000) as i64;
    let microseconds = total.rem_euclid(1_000_000) as i32;
    Instant { seconds, microseconds }
}

//! Calendar units and periods: stateless step-size policies, not
//! quantities.

use crate::error::Error;


/// A calendar or clock granularity.
///
/// Units double as anchor granularities for `start_of`/`end_of` and as
/// step sizes for [`Period`]. The three time-of-day units cannot be
/// applied to a date-only value; doing so reports
/// [`Error::UnsupportedGranularity`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Unit {

    /// Whether this unit is finer than a whole day, making it
    /// inapplicable to date-only values.
    pub fn is_time_of_day(self) -> bool {
        matches!(self, Unit::Second | Unit::Minute | Unit::Hour)
    }

    /// Checks this unit against a date-only value.
    pub(crate) fn require_date_granularity(self) -> Result<(), Error> {
        if self.is_time_of_day() {
            Err(Error::UnsupportedGranularity { unit: self })
        }
        else {
            Ok(())
        }
    }
}


/// A **period** is a unit with a multiplier: “3 months”, “2 weeks”,
/// “1 day”. It describes a step size to take, not an amount of elapsed
/// time — that distinction belongs to [`Duration`](crate::Duration).
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Period {
    unit: Unit,
    count: i64,
}

impl Period {

    /// A period of exactly one of the given unit.
    pub fn of(unit: Unit) -> Self {
        Self { unit, count: 1 }
    }

    /// A period of several of the given unit.
    pub fn of_every(unit: Unit, count: i64) -> Self {
        Self { unit, count }
    }

    /// The unit this period steps by.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The multiplier on the unit.
    pub fn count(&self) -> i64 {
        self.count
    }
}

//! The ISO-8601 duration grammar: `[-]P[nY][nM][nD][T[nH][nM][nS]]` and
//! the week form `[-]PnW`, parsed by recursive descent, plus the
//! canonical serialization back out.
//!
//! Grammar rules enforced here:
//!
//! - the leading sign, if any, applies to the whole duration;
//! - the `P` designator is mandatory, `T` is mandatory if and only if a
//!   time-of-day component follows;
//! - at least one component must be present — a bare `P` is malformed;
//! - only the *last* component present may carry a decimal fraction,
//!   and only an absolute one may (a fraction of a month has no exact
//!   length, so fractional `Y`/`M` are rejected);
//! - the week form excludes every other designator;
//! - designator letters are accepted in either case; output is always
//!   canonical uppercase.

use std::fmt;
use std::str::FromStr;

use crate::duration::Duration;
use crate::error::Error;


impl Duration {

    /// Parses an ISO-8601 duration string.
    ///
    /// ```
    /// use calendric::Duration;
    ///
    /// let d = Duration::parse_iso("P1Y2M3DT4H5M6S").unwrap();
    /// assert_eq!(d.years(), 1);
    /// assert_eq!(d.months(), 2);
    /// assert_eq!(d.whole_seconds(), 3 * 86400 + 4 * 3600 + 5 * 60 + 6);
    /// ```
    pub fn parse_iso(input: &str) -> Result<Self, Error> {
        DurationParser::new(input).parse()
    }

    /// Serializes this duration in canonical ISO-8601 form: uppercase
    /// designators, the minimal set of non-zero components, a fraction
    /// only on the seconds, and `PT0S` for the zero duration.
    pub fn to_iso_string(&self) -> String {
        let negative = self.total_months() < 0
                    || self.whole_seconds() < 0
                    || self.subsec_microseconds() < 0;
        let d = if negative { self.abs() } else { *self };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push('P');

        if d.years() != 0 {
            out.push_str(&format!("{}Y", d.years()));
        }
        if d.months() != 0 {
            out.push_str(&format!("{}M", d.months()));
        }

        let mut seconds = d.whole_seconds();
        let micros = d.subsec_microseconds();

        // An exact number of whole weeks, with nothing else around it,
        // canonically uses the week form.
        if !d.has_calendar() && micros == 0 && seconds != 0 && seconds % (7 * 86400) == 0 {
            out.push_str(&format!("{}W", seconds / (7 * 86400)));
            return out;
        }

        if seconds / 86400 != 0 {
            out.push_str(&format!("{}D", seconds / 86400));
            seconds %= 86400;
        }

        let (hours, minutes) = (seconds / 3600, seconds / 60 % 60);
        seconds %= 60;

        if hours != 0 || minutes != 0 || seconds != 0 || micros != 0 {
            out.push('T');
            if hours != 0 {
                out.push_str(&format!("{}H", hours));
            }
            if minutes != 0 {
                out.push_str(&format!("{}M", minutes));
            }
            if micros != 0 {
                let frac = format!("{:06}", micros);
                out.push_str(&format!("{}.{}S", seconds, frac.trim_end_matches('0')));
            }
            else if seconds != 0 {
                out.push_str(&format!("{}S", seconds));
            }
        }

        // Everything was zero: the fixed minimal representative.
        if out.ends_with('P') {
            out.push_str("T0S");
        }

        out
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(input)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}


/// One parsed component: its whole part, and the fraction digits if the
/// component carried any.
struct Component {
    whole: i64,
    fraction: Option<Fraction>,
}

struct Fraction {
    digits: i64,
    scale: u32,
}

struct DurationParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> DurationParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, bytes: input.as_bytes(), pos: 0 }
    }

    fn malformed(&self) -> Error {
        Error::MalformedDuration { input: self.input.into() }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn eat(&mut self, letter: u8) -> bool {
        match self.peek() {
            Some(b) if b.eq_ignore_ascii_case(&letter) => { self.pos += 1; true }
            _ => false,
        }
    }

    fn parse(&mut self) -> Result<Duration, Error> {
        let negative = match self.peek() {
            Some(b'-') => { self.pos += 1; true }
            Some(b'+') => { self.pos += 1; false }
            _ => false,
        };

        if !self.eat(b'P') {
            return Err(self.malformed());
        }

        let duration = self.parse_body()?;

        if self.pos != self.bytes.len() {
            return Err(self.malformed());
        }

        Ok(if negative { -duration } else { duration })
    }

    fn parse_body(&mut self) -> Result<Duration, Error> {
        let mut years = 0i64;
        let mut months = 0i64;
        let mut micros = 0i128;
        let mut any = false;
        let mut fraction_seen = false;

        // The date section: Y, M, D — or the mutually exclusive W form.
        while let Some(b) = self.peek() {
            if b.eq_ignore_ascii_case(&b'T') {
                break;
            }

            let component = self.parse_component()?;
            let designator = self.bump().ok_or_else(|| self.malformed())?;

            // A fraction is only legal on the final component.
            if fraction_seen {
                return Err(self.malformed());
            }

            match designator.to_ascii_uppercase() {
                b'Y' | b'M' if component.fraction.is_some() => {
                    return Err(self.malformed());
                }
                b'Y' => years = component.whole,
                b'M' => months = component.whole,
                b'W' => {
                    // The week form stands alone.
                    if any || self.pos != self.bytes.len() {
                        return Err(self.malformed());
                    }
                    micros += scaled_micros(&component, 7 * 86400);
                    fraction_seen |= component.fraction.is_some();
                    any = true;
                    continue;
                }
                b'D' => micros += scaled_micros(&component, 86400),
                _ => return Err(self.malformed()),
            }

            fraction_seen |= component.fraction.is_some();
            any = true;
        }

        // The time section.
        if self.eat(b'T') {
            let mut time_any = false;

            while self.peek().is_some() {
                let component = self.parse_component()?;
                let designator = self.bump().ok_or_else(|| self.malformed())?;

                if fraction_seen {
                    return Err(self.malformed());
                }

                match designator.to_ascii_uppercase() {
                    b'H' => micros += scaled_micros(&component, 3600),
                    b'M' => micros += scaled_micros(&component, 60),
                    b'S' => micros += scaled_micros(&component, 1),
                    _ => return Err(self.malformed()),
                }

                fraction_seen |= component.fraction.is_some();
                time_any = true;
            }

            // A T with nothing after it is malformed.
            if !time_any {
                return Err(self.malformed());
            }

            any = true;
        }

        if !any {
            return Err(self.malformed());
        }

        Ok(Duration::from_total_micros(micros).with_calendar(years, months))
    }

    fn parse_component(&mut self) -> Result<Component, Error> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }

        if self.pos == start {
            return Err(self.malformed());
        }

        let whole: i64 = self.input[start..self.pos].parse()
            .map_err(|_| self.malformed())?;

        // ISO-8601 allows either the dot or the comma as the decimal
        // mark.
        let fraction = if matches!(self.peek(), Some(b'.') | Some(b',')) {
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }

            if self.pos == frac_start || self.pos - frac_start > 9 {
                return Err(self.malformed());
            }

            let digits: i64 = self.input[frac_start..self.pos].parse()
                .map_err(|_| self.malformed())?;
            Some(Fraction { digits, scale: (self.pos - frac_start) as u32 })
        }
        else {
            None
        };

        Ok(Component { whole, fraction })
    }
}

/// Converts a component of a unit worth `unit_seconds` into
/// microseconds, fraction included, truncating any precision finer than
/// a microsecond.
fn scaled_micros(component: &Component, unit_seconds: i64) -> i128 {
    let unit_micros = unit_seconds as i128 * 1_000_000;
    let mut total = component.whole as i128 * unit_micros;

    if let Some(fraction) = &component.fraction {
        total += fraction.digits as i128 * unit_micros / 10i128.pow(fraction.scale);
    }

    total
}

//! Rendering durations as pluralized unit phrases.
//!
//! A duration breaks into phrases from the largest unit down: the
//! calendar components first (years, then months — they outrank every
//! absolute unit), then days, hours, minutes, and seconds from the
//! exact part. Weeks appear only when the duration is purely absolute
//! and an exact number of them; in every other case days dominate.

use crate::duration::Duration;
use crate::locale::Locale;
use crate::period::Unit;


const SECONDS_IN_WEEK: i64 = 7 * 86400;

/// One selected unit with its magnitude; the seconds entry may carry
/// the sub-second fraction as leftover microseconds.
struct Phrase {
    unit: Unit,
    magnitude: u64,
    fraction_micros: i32,
}

impl Duration {

    /// This duration as human-readable text in the given language,
    /// every non-zero unit included.
    ///
    /// ```
    /// use calendric::{Duration, EnglishLocale};
    ///
    /// let d = Duration::of_calendar(1, 2) + Duration::of_units(0, 3, 0, 45, 0);
    /// assert_eq!(d.humanize(&EnglishLocale),
    ///            "1 year, 2 months, 3 days and 45 minutes");
    /// ```
    ///
    /// A negative duration reads the same as its absolute value; the
    /// sign is for the caller's surrounding phrase to convey. The zero
    /// duration has a phrase of its own, never empty text.
    pub fn humanize(&self, locale: &dyn Locale) -> String {
        self.humanize_at_most(locale, usize::MAX)
    }

    /// Like [`humanize`](Duration::humanize), but keeping only the
    /// largest `max_units` units. Anything below the smallest kept unit
    /// is dropped, except the sub-second fraction when that unit is
    /// seconds, which renders with the locale's decimal separator.
    pub fn humanize_at_most(&self, locale: &dyn Locale, max_units: usize) -> String {
        let mut phrases = self.abs().breakdown();
        phrases.truncate(max_units);

        if phrases.is_empty() {
            // 0 takes the plural form in every built-in language.
            return format!("0 {}", locale.unit_name(Unit::Second,
                                                    locale.plural_category(0)));
        }

        let rendered = phrases.iter()
                              .map(|phrase| phrase.render(locale))
                              .collect::<Vec<_>>();
        locale.join_phrases(&rendered)
    }

    /// Splits a non-negative duration into its unit phrases, largest
    /// unit first.
    fn breakdown(&self) -> Vec<Phrase> {
        let mut phrases = Vec::new();
        let mut push = |unit, magnitude: i64| {
            if magnitude != 0 {
                phrases.push(Phrase { unit, magnitude: magnitude as u64, fraction_micros: 0 });
            }
        };

        push(Unit::Year, self.years());
        push(Unit::Month, self.months());

        let mut seconds = self.whole_seconds();
        let micros = self.subsec_microseconds();

        if !self.has_calendar() && micros == 0 && seconds != 0
        && seconds % SECONDS_IN_WEEK == 0 {
            push(Unit::Week, seconds / SECONDS_IN_WEEK);
            return phrases;
        }

        push(Unit::Day, seconds / 86400);
        seconds %= 86400;
        push(Unit::Hour, seconds / 3600);
        push(Unit::Minute, seconds / 60 % 60);
        seconds %= 60;

        if seconds != 0 || micros != 0 {
            phrases.push(Phrase {
                unit: Unit::Second,
                magnitude: seconds as u64,
                fraction_micros: micros,
            });
        }

        phrases
    }
}

impl Phrase {
    fn render(&self, locale: &dyn Locale) -> String {
        if self.fraction_micros != 0 {
            let digits = format!("{:06}", self.fraction_micros);
            return format!("{}{}{} {}",
                           self.magnitude,
                           locale.decimal_separator(),
                           digits.trim_end_matches('0'),
                           locale.unit_name(self.unit, locale.fractional_category()));
        }

        format!("{} {}",
                self.magnitude,
                locale.unit_name(self.unit, locale.plural_category(self.magnitude)))
    }
}

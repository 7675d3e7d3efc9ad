//! The built-in English locale.

use crate::cal::datetime::{Month, Weekday};
use crate::locale::{Locale, PluralCategory};
use crate::period::Unit;

use crate::cal::datetime::Month::*;
use crate::cal::datetime::Weekday::*;


/// English: two plural categories, one against everything else.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct EnglishLocale;

impl Locale for EnglishLocale {

    fn tag(&self) -> &'static str {
        "en"
    }

    fn long_month_name(&self, month: Month) -> &'static str {
        match month {
            January => "January",  February => "February",  March     => "March",
            April   => "April",    May      => "May",       June      => "June",
            July    => "July",     August   => "August",    September => "September",
            October => "October",  November => "November",  December  => "December",
        }
    }

    fn short_month_name(&self, month: Month) -> &'static str {
        match month {
            January => "Jan",  February => "Feb",  March     => "Mar",
            April   => "Apr",  May      => "May",  June      => "Jun",
            July    => "Jul",  August   => "Aug",  September => "Sep",
            October => "Oct",  November => "Nov",  December  => "Dec",
        }
    }

    fn long_day_name(&self, day: Weekday) -> &'static str {
        match day {
            Monday   => "Monday",    Tuesday  => "Tuesday",  Wednesday => "Wednesday",
            Thursday => "Thursday",  Friday   => "Friday",   Saturday  => "Saturday",
            Sunday   => "Sunday",
        }
    }

    fn short_day_name(&self, day: Weekday) -> &'static str {
        match day {
            Monday   => "Mon",  Tuesday  => "Tue",  Wednesday => "Wed",
            Thursday => "Thu",  Friday   => "Fri",  Saturday  => "Sat",
            Sunday   => "Sun",
        }
    }

    fn plural_category(&self, count: u64) -> PluralCategory {
        if count == 1 { PluralCategory::One } else { PluralCategory::Other }
    }

    fn decimal_separator(&self) -> char {
        '.'
    }

    fn unit_name(&self, unit: Unit, category: PluralCategory) -> &'static str {
        let one = category == PluralCategory::One;
        match unit {
            Unit::Second  => if one { "second" }  else { "seconds" },
            Unit::Minute  => if one { "minute" }  else { "minutes" },
            Unit::Hour    => if one { "hour" }    else { "hours" },
            Unit::Day     => if one { "day" }     else { "days" },
            Unit::Week    => if one { "week" }    else { "weeks" },
            Unit::Month   => if one { "month" }   else { "months" },
            Unit::Quarter => if one { "quarter" } else { "quarters" },
            Unit::Year    => if one { "year" }    else { "years" },
        }
    }

    fn conjunction(&self) -> &'static str {
        "and"
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_against_the_rest() {
        let en = EnglishLocale;
        assert_eq!(en.plural_category(1), PluralCategory::One);
        assert_eq!(en.plural_category(0), PluralCategory::Other);
        assert_eq!(en.plural_category(2), PluralCategory::Other);
        assert_eq!(en.plural_category(101), PluralCategory::Other);
    }

    #[test]
    fn nouns() {
        let en = EnglishLocale;
        assert_eq!(en.unit_name(Unit::Hour, PluralCategory::One), "hour");
        assert_eq!(en.unit_name(Unit::Hour, PluralCategory::Other), "hours");
    }

    #[test]
    fn joining() {
        let en = EnglishLocale;
        let phrases = vec!["1 year".to_owned(), "2 months".to_owned(), "3 days".to_owned()];
        assert_eq!(en.join_phrases(&phrases), "1 year, 2 months and 3 days");
    }
}

//! The built-in Polish locale, with the three-way plural rule of the
//! Slavic languages.

use crate::cal::datetime::{Month, Weekday};
use crate::locale::{Locale, PluralCategory};
use crate::period::Unit;

use crate::cal::datetime::Month::*;
use crate::cal::datetime::Weekday::*;


/// Polish: one for 1, few for magnitudes ending in 2–4 outside the
/// teens, many for everything else. Fractional magnitudes take the
/// genitive singular.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct PolishLocale;

impl Locale for PolishLocale {

    fn tag(&self) -> &'static str {
        "pl"
    }

    fn long_month_name(&self, month: Month) -> &'static str {
        match month {
            January => "styczeń",      February => "luty",      March     => "marzec",
            April   => "kwiecień",     May      => "maj",       June      => "czerwiec",
            July    => "lipiec",       August   => "sierpień",  September => "wrzesień",
            October => "październik",  November => "listopad",  December  => "grudzień",
        }
    }

    fn short_month_name(&self, month: Month) -> &'static str {
        match month {
            January => "sty",  February => "lut",  March     => "mar",
            April   => "kwi",  May      => "maj",  June      => "cze",
            July    => "lip",  August   => "sie",  September => "wrz",
            October => "paź",  November => "lis",  December  => "gru",
        }
    }

    fn long_day_name(&self, day: Weekday) -> &'static str {
        match day {
            Monday   => "poniedziałek",  Tuesday  => "wtorek",  Wednesday => "środa",
            Thursday => "czwartek",      Friday   => "piątek",  Saturday  => "sobota",
            Sunday   => "niedziela",
        }
    }

    fn short_day_name(&self, day: Weekday) -> &'static str {
        match day {
            Monday   => "pon",  Tuesday  => "wto",  Wednesday => "śro",
            Thursday => "czw",  Friday   => "pią",  Saturday  => "sob",
            Sunday   => "nie",
        }
    }

    fn plural_category(&self, count: u64) -> PluralCategory {
        if count == 1 {
            return PluralCategory::One;
        }

        // The teens always take many, even though they end in 2–4.
        let last_two = count % 100;
        let last = count % 10;
        if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            PluralCategory::Few
        }
        else {
            PluralCategory::Many
        }
    }

    fn decimal_separator(&self) -> char {
        ','
    }

    fn unit_name(&self, unit: Unit, category: PluralCategory) -> &'static str {
        match (unit, category) {
            (Unit::Second,  PluralCategory::One) => "sekunda",
            (Unit::Second,  PluralCategory::Few) => "sekundy",
            (Unit::Second,  PluralCategory::Many) => "sekund",
            (Unit::Second,  PluralCategory::Other) => "sekundy",

            (Unit::Minute,  PluralCategory::One) => "minuta",
            (Unit::Minute,  PluralCategory::Few) => "minuty",
            (Unit::Minute,  PluralCategory::Many) => "minut",
            (Unit::Minute,  PluralCategory::Other) => "minuty",

            (Unit::Hour,    PluralCategory::One) => "godzina",
            (Unit::Hour,    PluralCategory::Few) => "godziny",
            (Unit::Hour,    PluralCategory::Many) => "godzin",
            (Unit::Hour,    PluralCategory::Other) => "godziny",

            (Unit::Day,     PluralCategory::One) => "dzień",
            (Unit::Day,     PluralCategory::Few) => "dni",
            (Unit::Day,     PluralCategory::Many) => "dni",
            (Unit::Day,     PluralCategory::Other) => "dnia",

            (Unit::Week,    PluralCategory::One) => "tydzień",
            (Unit::Week,    PluralCategory::Few) => "tygodnie",
            (Unit::Week,    PluralCategory::Many) => "tygodni",
            (Unit::Week,    PluralCategory::Other) => "tygodnia",

            (Unit::Month,   PluralCategory::One) => "miesiąc",
            (Unit::Month,   PluralCategory::Few) => "miesiące",
            (Unit::Month,   PluralCategory::Many) => "miesięcy",
            (Unit::Month,   PluralCategory::Other) => "miesiąca",

            (Unit::Quarter, PluralCategory::One) => "kwartał",
            (Unit::Quarter, PluralCategory::Few) => "kwartały",
            (Unit::Quarter, PluralCategory::Many) => "kwartałów",
            (Unit::Quarter, PluralCategory::Other) => "kwartału",

            (Unit::Year,    PluralCategory::One) => "rok",
            (Unit::Year,    PluralCategory::Few) => "lata",
            (Unit::Year,    PluralCategory::Many) => "lat",
            (Unit::Year,    PluralCategory::Other) => "roku",
        }
    }

    fn conjunction(&self) -> &'static str {
        "i"
    }
}

use calendric::{Date, DateTime, EnglishLocale, Error, Month, Offset, Pattern};


mod strict_iso {
    use super::*;

    #[test]
    fn date_only() {
        assert_eq!(Date::parse("2024-01-15").unwrap(),
                   Date::ymd(2024, Month::January, 15).unwrap());
    }

    #[test]
    fn the_offset_pins_the_instant() {
        // 14:30:45 one hour east of the meridian is 13:30:45 UTC.
        let parsed = DateTime::parse("2024-01-15T14:30:45+01:00").unwrap();
        assert_eq!(parsed, DateTime::parse("2024-01-15T13:30:45Z").unwrap());
    }

    #[test]
    fn a_missing_offset_reads_as_utc_by_policy() {
        let parsed = DateTime::parse("2025-09-23T14:30:45").unwrap();
        assert_eq!(parsed.offset(), Some(Offset::utc()));
    }

    #[test]
    fn a_space_works_as_the_separator() {
        assert_eq!(DateTime::parse("2025-09-23 14:30:45").unwrap(),
                   DateTime::parse("2025-09-23T14:30:45").unwrap());
    }

    #[test]
    fn a_date_alone_reads_as_midnight_utc() {
        let parsed = DateTime::parse("2025-09-23").unwrap();
        assert_eq!(parsed.time().to_seconds(), 0);
        assert_eq!(parsed.offset(), Some(Offset::utc()));
    }

    #[test]
    fn fractional_seconds_scale_to_microseconds() {
        let parsed = DateTime::parse("2024-01-15T14:30:45.25Z").unwrap();
        assert_eq!(parsed.time().to_iso_string(), "14:30:45.250000");
    }

    #[test]
    fn from_str_is_the_strict_parser() {
        let date: Date = "2015-06-26".parse().unwrap();
        assert_eq!(date, Date::ymd(2015, Month::June, 26).unwrap());

        let result: Result<DateTime, Error> = "half past nine".parse();
        assert_eq!(result.unwrap_err(), Error::MalformedIso);
    }
}

mod malformed {
    use super::*;

    fn rejects(input: &str) {
        assert_eq!(DateTime::parse(input), Err(Error::MalformedIso));
    }

    #[test] fn empty() { rejects(""); }
    #[test] fn slashes() { rejects("2024/01/15"); }
    #[test] fn single_digit_fields() { rejects("2024-1-5"); }
    #[test] fn missing_seconds() { rejects("2024-01-15T14:30"); }
    #[test] fn offset_without_colon() { rejects("2024-01-15T14:30:45+0100"); }
    #[test] fn trailing_garbage() { rejects("2024-01-15T14:30:45Z again"); }

    #[test]
    fn impossible_dates_are_invalid_not_malformed() {
        assert_eq!(Date::parse("2023-02-30"), Err(Error::InvalidDate));
        assert_eq!(DateTime::parse("2023-02-03T25:00:00"), Err(Error::InvalidTime));
    }

    #[test]
    fn nothing_falls_back_to_a_default() {
        // An unparsable date is an error, never "today".
        assert!(Date::parse("not a date").is_err());
    }
}

mod auto_detect {
    use super::*;

    // The detection ladder has one rung: strict ISO. Anything else
    // needs the caller to say which layout it is in, because guessing
    // between non-ISO layouts guesses wrong eventually.

    #[test]
    fn iso_input_needs_no_pattern() {
        assert!(Date::parse("2024-01-15").is_ok());
    }

    #[test]
    fn ambiguous_input_is_refused_without_a_pattern() {
        assert_eq!(Date::parse("15/01/2024"), Err(Error::MalformedIso));
    }

    #[test]
    fn the_explicit_pattern_resolves_the_ambiguity() {
        let en = EnglishLocale;
        let pattern = Pattern::compile("j/m/Y");

        assert_eq!(Date::parse_pattern("15/01/2024", &pattern, &en).unwrap(),
                   Date::ymd(2024, Month::January, 15).unwrap());
    }
}

use calendric::{Date, DateTime, Duration, Month, Offset, Time, ISO};


mod dates {
    use super::*;

    #[test]
    fn recently() {
        let date = Date::ymd(1600, Month::February, 28).unwrap();
        assert_eq!(date.iso().to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = Date::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(date.iso().to_string(), "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = Date::ymd(10601, Month::January, 31).unwrap();
        assert_eq!(date.iso().to_string(), "+10601-01-31");
    }

    #[test]
    fn padded_fields() {
        let date = Date::ymd(7, Month::April, 3).unwrap();
        assert_eq!(date.iso().to_string(), "0007-04-03");
    }
}

mod times {
    use super::*;

    #[test]
    fn midday() {
        let time = Time::hms(12, 0, 0).unwrap();
        assert_eq!(time.iso().to_string(), "12:00:00");
    }

    #[test]
    fn on_the_half_hour() {
        let time = Time::hm(9, 30).unwrap();
        assert_eq!(time.iso().to_string(), "09:30:00");
    }

    #[test]
    fn with_fraction() {
        let time = Time::hms_micro(12, 0, 0, 500_000).unwrap();
        assert_eq!(time.iso().to_string(), "12:00:00.500000");
    }

    #[test]
    fn tiny_fraction_keeps_its_zeroes() {
        let time = Time::hms_micro(0, 0, 0, 42).unwrap();
        assert_eq!(time.iso().to_string(), "00:00:00.000042");
    }
}

mod datetimes {
    use super::*;

    #[test]
    fn naive_values_render_their_local_fields() {
        let then = DateTime::new(Date::ymd(2009, Month::February, 13).unwrap(),
                                 Time::hms(23, 31, 30).unwrap());
        assert_eq!(then.iso().to_string(), "2009-02-13T23:31:30");
    }

    #[test]
    fn utc_values_render_a_zulu() {
        let then = DateTime::new(Date::ymd(2009, Month::February, 13).unwrap(),
                                 Time::hms(23, 31, 30).unwrap())
            .with_offset(Offset::utc());
        assert_eq!(then.iso().to_string(), "2009-02-13T23:31:30Z");
    }

    #[test]
    fn offset_values_render_the_offset() {
        let then = DateTime::new(Date::ymd(2024, Month::January, 15).unwrap(),
                                 Time::hms(14, 30, 45).unwrap())
            .with_offset(Offset::of_hours_and_minutes(5, 30).unwrap());
        assert_eq!(then.iso().to_string(), "2024-01-15T14:30:45+05:30");
    }

    #[test]
    fn to_iso_string_is_the_same_text() {
        let then = DateTime::new(Date::ymd(2024, Month::January, 15).unwrap(),
                                 Time::hms(14, 30, 45).unwrap());
        assert_eq!(then.to_iso_string(), then.iso().to_string());
    }
}

mod offsets {
    use super::*;

    #[test]
    fn zulu() {
        assert_eq!(Offset::utc().iso().to_string(), "Z");
    }

    #[test]
    fn eastern() {
        let offset = Offset::of_hours_and_minutes(1, 30).unwrap();
        assert_eq!(offset.iso().to_string(), "+01:30");
    }

    #[test]
    fn western() {
        let offset = Offset::of_hours_and_minutes(-9, -30).unwrap();
        assert_eq!(offset.iso().to_string(), "-09:30");
    }
}

mod durations {
    use super::*;

    #[test]
    fn the_zero_representative() {
        assert_eq!(Duration::zero().to_iso_string(), "PT0S");
    }

    #[test]
    fn minimal_components_only() {
        assert_eq!(Duration::of_units(0, 0, 4, 0, 6).to_iso_string(), "PT4H6S");
        assert_eq!(Duration::of_calendar(0, 2).to_iso_string(), "P2M");
    }

    #[test]
    fn whole_weeks_take_the_week_form() {
        assert_eq!(Duration::of_units(3, 0, 0, 0, 0).to_iso_string(), "P3W");
    }

    #[test]
    fn a_broken_week_falls_back_to_days() {
        assert_eq!(Duration::of_units(1, 1, 0, 0, 0).to_iso_string(), "P8D");
    }
}

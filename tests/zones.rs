use calendric::{Date, DateTime, Error, FixedTimespan, FixedTimespanZone, FixedZoneTable,
                Instant, Month, Offset, Time, ZoneResolver};


// Central European time through 2024: standard +01:00, daylight +02:00
// between the last Sundays of March and October.
fn resolver() -> FixedZoneTable {
    FixedZoneTable::new().with_zone(FixedTimespanZone {
        name: "Europe/Warsaw",
        first: FixedTimespan { offset: 3600, is_dst: false, abbreviation: "CET" },
        rest: vec![
            (1711846800, FixedTimespan { offset: 7200, is_dst: true, abbreviation: "CEST" }),
            (1729990800, FixedTimespan { offset: 3600, is_dst: false, abbreviation: "CET" }),
        ],
    })
}

mod resolution {
    use super::*;

    #[test]
    fn winter_is_standard_time() {
        let info = resolver().resolve("Europe/Warsaw", Instant::at(1704067200)).unwrap();
        assert_eq!(info.offset.seconds(), 3600);
        assert!(!info.is_dst);
    }

    #[test]
    fn summer_is_daylight_time() {
        let info = resolver().resolve("Europe/Warsaw", Instant::at(1719792000)).unwrap();
        assert_eq!(info.offset.seconds(), 7200);
        assert!(info.is_dst);
    }

    #[test]
    fn the_handover_instant_belongs_to_the_new_span() {
        let info = resolver().resolve("Europe/Warsaw", Instant::at(1711846800)).unwrap();
        assert!(info.is_dst);
    }

    #[test]
    fn unknown_zones_are_named_in_the_error() {
        assert_eq!(resolver().resolve("Mars/Olympus", Instant::at_epoch()).unwrap_err(),
                   Error::UnknownZone { name: "Mars/Olympus".into() });
    }
}

mod conversion {
    use super::*;

    #[test]
    fn in_zone_keeps_the_instant_and_moves_the_fields() {
        let utc = DateTime::parse("2024-07-01T12:00:00Z").unwrap();
        let local = utc.in_zone("Europe/Warsaw", &resolver()).unwrap();

        assert_eq!(local.time(), Time::hms(14, 0, 0).unwrap());
        assert_eq!(local.offset(), Some(Offset::of_hours_and_minutes(2, 0).unwrap()));
        assert_eq!(local, utc);
    }

    #[test]
    fn naive_values_have_no_instant_to_convert() {
        let naive = DateTime::new(Date::ymd(2024, Month::July, 1).unwrap(),
                                  Time::hms(12, 0, 0).unwrap());

        assert_eq!(naive.in_zone("Europe/Warsaw", &resolver()).unwrap_err(),
                   Error::TimezoneMismatch);
    }
}

mod dst_boundaries {
    use super::*;

    // The clocks spring forward during the night of 2024-03-30 to -31,
    // so that Saturday noon is still +01:00 and Sunday noon is +02:00.

    fn saturday_noon() -> DateTime {
        DateTime::new_with_offset(Date::ymd(2024, Month::March, 30).unwrap(),
                                  Time::hms(12, 0, 0).unwrap(),
                                  Offset::of_hours_and_minutes(1, 0).unwrap())
    }

    #[test]
    fn twentyfour_hours_later_is_one_in_the_afternoon() {
        let later = saturday_noon()
            .add_seconds_in_zone(24 * 3600, "Europe/Warsaw", &resolver())
            .unwrap();

        assert_eq!(later.date(), Date::ymd(2024, Month::March, 31).unwrap());
        assert_eq!(later.time(), Time::hms(13, 0, 0).unwrap());
        assert_eq!(later.offset(), Some(Offset::of_hours_and_minutes(2, 0).unwrap()));
    }

    #[test]
    fn one_calendar_day_later_is_still_noon() {
        let later = saturday_noon().add_days(1);

        assert_eq!(later.date(), Date::ymd(2024, Month::March, 31).unwrap());
        assert_eq!(later.time(), Time::hms(12, 0, 0).unwrap());
    }

    #[test]
    fn the_two_adds_deliberately_disagree() {
        // Across the spring-forward night, 24 elapsed hours and one
        // calendar day land on different wall clocks.
        let elapsed = saturday_noon()
            .add_seconds_in_zone(24 * 3600, "Europe/Warsaw", &resolver())
            .unwrap();
        let calendar = saturday_noon().add_days(1);

        assert_ne!(elapsed.time(), calendar.time());
    }
}

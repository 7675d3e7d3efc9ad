use calendric::{Duration, Error, LocaleRegistry};


fn registry() -> LocaleRegistry {
    LocaleRegistry::new()
}

mod english {
    use super::*;

    #[test]
    fn a_full_breakdown() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        let d = Duration::of_calendar(1, 2) + Duration::of_units(0, 3, 4, 5, 6);
        assert_eq!(d.humanize(en),
                   "1 year, 2 months, 3 days, 4 hours, 5 minutes and 6 seconds");
    }

    #[test]
    fn singulars_and_plurals() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        assert_eq!(Duration::of_units(0, 1, 0, 0, 0).humanize(en), "1 day");
        assert_eq!(Duration::of_units(0, 2, 0, 0, 0).humanize(en), "2 days");
        assert_eq!(Duration::of_calendar(1, 1).humanize(en), "1 year and 1 month");
    }

    #[test]
    fn zero_is_a_phrase_not_an_empty_string() {
        let registry = registry();
        assert_eq!(Duration::zero().humanize(registry.get("en").unwrap()), "0 seconds");
    }

    #[test]
    fn negatives_read_as_their_absolute_value() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        // The sign belongs to the caller's framing ("3 days ago"), not
        // to the phrase itself.
        assert_eq!((-Duration::of_units(0, 3, 0, 0, 0)).humanize(en), "3 days");
    }

    #[test]
    fn exact_weeks_read_as_weeks() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        assert_eq!(Duration::of_units(2, 0, 0, 0, 0).humanize(en), "2 weeks");
        assert_eq!(Duration::of_units(0, 8, 0, 0, 0).humanize(en), "8 days");
    }

    #[test]
    fn fractional_seconds_render_with_the_point() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        assert_eq!(Duration::of_microseconds(1_500_000).humanize(en), "1.5 seconds");
    }

    #[test]
    fn the_unit_cap() {
        let registry = registry();
        let en = registry.get("en").unwrap();

        let d = Duration::of_calendar(1, 2) + Duration::of_units(0, 3, 4, 5, 6);
        assert_eq!(d.humanize_at_most(en, 3), "1 year, 2 months and 3 days");
        assert_eq!(d.humanize_at_most(en, 1), "1 year");
    }
}

mod polish {
    use super::*;

    // The three-form closure over the representative magnitudes: 1 is
    // one, 2/4/22 are few, and 5/11/12/21/25 are many.
    #[test]
    fn plural_closure_over_the_representative_set() {
        let registry = registry();
        let pl = registry.get("pl").unwrap();

        let cases = [
            (1, "1 minuta"),
            (2, "2 minuty"),
            (4, "4 minuty"),
            (5, "5 minut"),
            (11, "11 minut"),
            (12, "12 minut"),
            (21, "21 minut"),
            (22, "22 minuty"),
            (25, "25 minut"),
        ];

        for (count, expected) in cases {
            assert_eq!(Duration::of_units(0, 0, 0, count, 0).humanize(pl), expected);
        }
    }

    #[test]
    fn joined_with_the_polish_conjunction() {
        let registry = registry();
        let pl = registry.get("pl").unwrap();

        let d = Duration::of_calendar(2, 0) + Duration::of_units(0, 3, 0, 0, 0);
        assert_eq!(d.humanize(pl), "2 lata i 3 dni");
    }

    #[test]
    fn fractional_seconds_render_with_the_comma() {
        let registry = registry();
        let pl = registry.get("pl").unwrap();

        assert_eq!(Duration::of_microseconds(1_500_000).humanize(pl), "1,5 sekundy");
    }

    #[test]
    fn zero_in_polish() {
        let registry = registry();
        assert_eq!(Duration::zero().humanize(registry.get("pl").unwrap()), "0 sekund");
    }
}

#[test]
fn an_unregistered_tag_reports_which_one() {
    let registry = registry();
    assert_eq!(registry.get("eo").unwrap_err(),
               Error::UnsupportedLocale { tag: "eo".into() });
}

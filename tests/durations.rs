use calendric::Duration;


mod the_two_parts {
    use super::*;

    #[test]
    fn calendar_components_stay_calendar() {
        // A month has no fixed length, so it never becomes seconds.
        let d = Duration::of_calendar(1, 2);
        assert_eq!(d.whole_seconds(), 0);
        assert_eq!(d.years(), 1);
        assert_eq!(d.months(), 2);
        assert!(d.has_calendar());
    }

    #[test]
    fn absolute_components_flatten_to_seconds() {
        let d = Duration::of_units(1, 2, 3, 4, 5);
        assert_eq!(d.whole_seconds(), 9 * 86400 + 3 * 3600 + 4 * 60 + 5);
        assert!(!d.has_calendar());
    }

    #[test]
    fn the_fraction_is_always_carried() {
        let d = Duration::of_microseconds(2_750_000);
        assert_eq!(d.whole_seconds(), 2);
        assert_eq!(d.subsec_microseconds(), 750_000);
    }

    #[test]
    fn the_fraction_sign_matches_the_seconds_sign() {
        let d = Duration::of_microseconds(-2_750_000);
        assert_eq!(d.whole_seconds(), -2);
        assert_eq!(d.subsec_microseconds(), -750_000);
    }

    #[test]
    fn zero_means_zero_in_both_parts() {
        assert!(Duration::zero().is_zero());
        assert!(!Duration::of_calendar(0, 1).is_zero());
        assert!(!Duration::of_microseconds(1).is_zero());
        assert!((Duration::of_seconds(5) - Duration::of_seconds(5)).is_zero());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn addition_carries_microseconds() {
        assert_eq!(Duration::of_microseconds(600_000) + Duration::of_microseconds(600_000),
                   Duration::of_microseconds(1_200_000));
    }

    #[test]
    fn addition_carries_months_into_years() {
        let sum = Duration::of_calendar(0, 7) + Duration::of_calendar(0, 7);
        assert_eq!(sum.years(), 1);
        assert_eq!(sum.months(), 2);
    }

    #[test]
    fn subtraction_borrows() {
        let gap = Duration::of_seconds(1) - Duration::of_microseconds(250_000);
        assert_eq!(gap.whole_seconds(), 0);
        assert_eq!(gap.subsec_microseconds(), 750_000);
    }

    #[test]
    fn negation_flips_both_parts() {
        let d = -(Duration::of_calendar(1, 2) + Duration::of_seconds(30));
        assert_eq!(d.years(), -1);
        assert_eq!(d.months(), -2);
        assert_eq!(d.whole_seconds(), -30);
    }

    #[test]
    fn multiplication_scales_both_parts() {
        let d = (Duration::of_calendar(0, 5) + Duration::of_microseconds(500_000)) * 3;
        assert_eq!(d.total_months(), 15);
        assert_eq!(d.whole_seconds(), 1);
        assert_eq!(d.subsec_microseconds(), 500_000);
    }

    #[test]
    fn absolute_value() {
        let d = -(Duration::of_calendar(1, 0) + Duration::of_seconds(90));
        assert_eq!(d.abs(), Duration::of_calendar(1, 0) + Duration::of_seconds(90));
    }
}

mod comparisons {
    use super::*;

    #[test]
    fn a_year_equals_twelve_months() {
        assert_eq!(Duration::of_calendar(1, 0), Duration::of_calendar(0, 12));
    }

    #[test]
    fn a_day_equals_twentyfour_hours() {
        assert_eq!(Duration::of_units(0, 1, 0, 0, 0), Duration::of_units(0, 0, 24, 0, 0));
    }

    #[test]
    fn ordering_follows_the_exact_part_first() {
        assert!(Duration::of_units(0, 0, 0, 30, 0) < Duration::of_units(0, 0, 1, 0, 0));
        assert!(Duration::of_seconds(59) < Duration::of_seconds(59) + Duration::of_microseconds(1));
    }
}

mod converted_views {
    use super::*;

    #[test]
    fn seconds_with_fraction() {
        assert_eq!(Duration::of_microseconds(1_500_000).total_seconds(), 1.5);
    }

    #[test]
    fn larger_units() {
        let day = Duration::of_units(0, 1, 0, 0, 0);
        assert_eq!(day.in_hours(), 24.0);
        assert_eq!(day.in_days(), 1.0);
        assert_eq!(Duration::of_units(2, 0, 0, 0, 0).in_weeks(), 2.0);
        assert_eq!(Duration::of_units(0, 0, 0, 90, 0).in_minutes(), 90.0);
    }

    #[test]
    fn the_calendar_part_has_no_converted_view() {
        // Converted views cover the exact part only.
        assert_eq!(Duration::of_calendar(1, 6).total_seconds(), 0.0);
    }
}

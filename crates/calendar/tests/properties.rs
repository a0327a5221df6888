use coursework_calendar::{Date, DateTime, days_in_month, is_leap_year};
use proptest::prelude::*;

fn valid_date() -> impl Strategy<Value = Date> {
    (-3000i32..3000, 1i32..=12)
        .prop_flat_map(|(year, month)| {
            (1..=days_in_month(month, year)).prop_map(move |day| Date::new(day, month, year))
        })
}

fn valid_date_time() -> impl Strategy<Value = DateTime> {
    (valid_date(), 0i32..24, 0i32..60, 0i32..60)
        .prop_map(|(date, h, m, s)| DateTime::from_date(date, h, m, s))
}

proptest! {
    #[test]
    fn february_length_follows_leap_rule(year in any::<i32>()) {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(is_leap_year(year), leap);
        prop_assert_eq!(days_in_month(2, year), if leap { 29 } else { 28 });
    }

    #[test]
    fn other_month_lengths_ignore_year(year in any::<i32>(), month in 1i32..=12) {
        prop_assume!(month != 2);
        let expected = if [4, 6, 9, 11].contains(&month) { 30 } else { 31 };
        prop_assert_eq!(days_in_month(month, year), expected);
    }

    #[test]
    fn add_then_subtract_days_round_trips(date in valid_date(), n in 0u32..5000) {
        prop_assert_eq!(date.add_days(n).subtract_days(n), date);
    }

    #[test]
    fn subtract_then_add_days_round_trips(date in valid_date(), n in 0u32..5000) {
        prop_assert_eq!(date.subtract_days(n).add_days(n), date);
    }

    #[test]
    fn add_days_stays_valid(date in valid_date(), n in 0u32..5000) {
        let moved = date.add_days(n);
        prop_assert!(Date::try_new(moved.day(), moved.month(), moved.year()).is_ok());
        prop_assert!(moved >= date);
    }

    #[test]
    fn add_then_subtract_hours_round_trips(dt in valid_date_time(), n in 0u32..100_000) {
        prop_assert_eq!(dt.add_hours(n).subtract_hours(n), dt);
    }

    #[test]
    fn hours_stay_in_range(dt in valid_date_time(), n in 0u32..100_000) {
        prop_assert!((0..24).contains(&dt.add_hours(n).hour()));
        prop_assert!((0..24).contains(&dt.subtract_hours(n).hour()));
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in valid_date_time(), b in valid_date_time()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a.date() == b.date(), a.day() == b.day() && a.month() == b.month() && a.year() == b.year());
    }

    #[test]
    fn display_parses_back(dt in valid_date_time()) {
        prop_assert_eq!(dt.to_string().parse::<DateTime>().unwrap(), dt);
        prop_assert_eq!(dt.date().to_string().parse::<Date>().unwrap(), dt.date());
    }
}

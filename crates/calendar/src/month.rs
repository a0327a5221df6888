//! Month lengths and the Gregorian leap-year rule.

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4, except for centuries,
/// which must also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// February has 29 days in leap years and 28 otherwise. April, June,
/// September and November have 30. Every other value of `month`, including
/// ones outside 1..=12, yields 31.
///
/// # Examples
///
/// ```
/// use coursework_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, 1996), 29);
/// assert_eq!(days_in_month(2, 1900), 28);
/// assert_eq!(days_in_month(4, 2024), 30);
/// assert_eq!(days_in_month(13, 2024), 31);
/// ```
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_PER_MONTH[month as usize],
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(1996));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn common_years() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(-1));
    }

    #[test]
    fn february() {
        assert_eq!(days_in_month(2, 1996), 29);
        assert_eq!(days_in_month(2, 1997), 28);
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1900), 28);
    }

    #[test]
    fn thirty_day_months() {
        for m in [4, 6, 9, 11] {
            assert_eq!(days_in_month(m, 2024), 30, "month {m}");
        }
    }

    #[test]
    fn thirty_one_day_months() {
        for m in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(m, 2024), 31, "month {m}");
        }
    }

    #[test]
    fn out_of_range_months_default_to_31() {
        assert_eq!(days_in_month(0, 2024), 31);
        assert_eq!(days_in_month(13, 2024), 31);
        assert_eq!(days_in_month(-2, 2024), 31);
    }

    #[test]
    fn table_sums_to_365() {
        let total: i32 = DAYS_PER_MONTH.iter().sum();
        assert_eq!(total, 365);
    }
}

//! Calendar date with month and year carrying.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A Gregorian calendar date.
///
/// Arithmetic never fails: values built with [`Date::new`] are not checked,
/// and out-of-range fields flow through the carry rules unchanged. Use
/// [`Date::try_new`] (or [`str::parse`]) to reject impossible dates up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    day: i32,
    month: i32,
    year: i32,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a date from day, month and year without validation.
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Creates a date, checking that the month and day exist.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidDay`] if `day` is not in
    /// `1..=days_in_month(month, year)`.
    pub fn try_new(day: i32, month: i32, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { day, month, year })
    }

    /// Returns the day within the month.
    pub fn day(self) -> i32 {
        self.day
    }

    /// Returns the month.
    pub fn month(self) -> i32 {
        self.month
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the date `days` days later.
    ///
    /// While the day exceeds the length of its month, that length is taken
    /// off and the month advances; December rolls into January of the next
    /// year. The year saturates at `i32::MAX`.
    pub fn add_days(self, days: u32) -> Self {
        let mut day = i64::from(self.day) + i64::from(days);
        let mut month = self.month;
        let mut year = self.year;

        loop {
            let len = i64::from(days_in_month(month, year));
            if day <= len {
                break;
            }
            day -= len;
            month = match month.checked_add(1) {
                Some(next) if next <= 12 => next,
                _ => {
                    year = year.saturating_add(1);
                    1
                }
            };
        }

        // day <= 31 once the loop exits.
        Self {
            day: day as i32,
            month,
            year,
        }
    }

    /// Returns the date `days` days earlier.
    ///
    /// While the day is zero or negative the month steps back (January rolls
    /// into December of the previous year) and the new month's length is
    /// added. The year saturates at `i32::MIN`.
    pub fn subtract_days(self, days: u32) -> Self {
        let mut day = i64::from(self.day) - i64::from(days);
        let mut month = self.month;
        let mut year = self.year;

        while day <= 0 {
            month = match month.checked_sub(1) {
                Some(prev) if prev >= 1 => prev,
                _ => {
                    year = year.saturating_sub(1);
                    12
                }
            };
            day += i64::from(days_in_month(month, year));
        }

        // Either unchanged from a valid i32 or in 1..=31 after borrowing.
        Self {
            day: day as i32,
            month,
            year,
        }
    }

    /// Returns the same day and month `years` years later.
    ///
    /// February 29 is kept as is even when the target year is not a leap
    /// year. The year saturates at the bounds of `i32`.
    pub fn add_years(self, years: u32) -> Self {
        Self {
            year: self.year.saturating_add_unsigned(years),
            ..self
        }
    }

    /// Returns the same day and month `years` years earlier.
    ///
    /// See [`Date::add_years`] for the February 29 behaviour.
    pub fn subtract_years(self, years: u32) -> Self {
        Self {
            year: self.year.saturating_sub_unsigned(years),
            ..self
        }
    }

    /// Absolute difference between the two year fields.
    pub fn difference_in_years(self, other: Self) -> u32 {
        self.year.abs_diff(other.year)
    }

    /// Absolute difference between the two month fields.
    ///
    /// This compares the raw fields only: January 2000 and December 1999 are
    /// 11 months apart by this measure.
    pub fn difference_in_months(self, other: Self) -> u32 {
        self.month.abs_diff(other.month)
    }

    /// Absolute difference between the two day fields.
    ///
    /// This is not an elapsed day count: January 31 and February 1 differ by
    /// 30.
    pub fn difference_in_days(self, other: Self) -> u32 {
        self.day.abs_diff(other.day)
    }

    /// Renders the date as `D/M/YYYY` with no zero padding.
    pub fn format_date(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses `D/M/Y` and validates the result with [`Date::try_new`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [day, month, year] = split_fields(input, '/', "expected D/M/Y")?;
        Self::try_new(day, month, year)
    }
}

/// Splits `input` on `sep` into exactly three integers.
pub(crate) fn split_fields(
    input: &str,
    sep: char,
    shape: &'static str,
) -> Result<[i32; 3], CalendarError> {
    let parse_error = |reason| CalendarError::Parse {
        input: input.to_string(),
        reason,
    };

    let mut fields = [0; 3];
    let mut parts = input.trim().split(sep);
    for field in &mut fields {
        let part = parts.next().ok_or_else(|| parse_error(shape))?;
        *field = part
            .trim()
            .parse()
            .map_err(|_| parse_error("fields must be integers"))?;
    }
    if parts.next().is_some() {
        return Err(parse_error(shape));
    }
    Ok(fields)
}

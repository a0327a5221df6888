//! Date with a time of day.

use std::fmt;
use std::str::FromStr;

use crate::date::{Date, split_fields};
use crate::error::CalendarError;

const HOURS_PER_DAY: u32 = 24;

/// A [`Date`] together with an hour, minute and second.
///
/// The time fields are plain integers. Only [`DateTime::try_new`] and parsing
/// check their ranges; arithmetic carries hours into days and leaves minutes
/// and seconds untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    hour: i32,
    minute: i32,
    second: i32,
}

impl DateTime {
    /// Creates a date-time from its six fields without validation.
    pub const fn new(
        day: i32,
        month: i32,
        year: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Self {
        Self {
            date: Date::new(day, month, year),
            hour,
            minute,
            second,
        }
    }

    /// Attaches a time of day to an existing date, without validation.
    pub const fn from_date(date: Date, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            date,
            hour,
            minute,
            second,
        }
    }

    /// Creates a date-time, checking the date and the time ranges.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Date::try_new`], or
    /// [`CalendarError::InvalidTime`] when the hour is not in 0..=23 or the
    /// minute or second is not in 0..=59.
    pub fn try_new(
        day: i32,
        month: i32,
        year: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Result<Self, CalendarError> {
        let date = Date::try_new(day, month, year)?;
        check_time_field("hour", hour, 23)?;
        check_time_field("minute", minute, 59)?;
        check_time_field("second", second, 59)?;
        Ok(Self::from_date(date, hour, minute, second))
    }

    /// Returns the calendar date part.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the day of the month.
    pub fn day(self) -> i32 {
        self.date.day()
    }

    /// Returns the month.
    pub fn month(self) -> i32 {
        self.date.month()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the hour.
    pub fn hour(self) -> i32 {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(self) -> i32 {
        self.minute
    }

    /// Returns the second.
    pub fn second(self) -> i32 {
        self.second
    }

    /// Returns the value `days` days later, keeping the time of day.
    pub fn add_days(self, days: u32) -> Self {
        Self {
            date: self.date.add_days(days),
            ..self
        }
    }

    /// Returns the value `days` days earlier, keeping the time of day.
    pub fn subtract_days(self, days: u32) -> Self {
        Self {
            date: self.date.subtract_days(days),
            ..self
        }
    }

    /// Returns the value `hours` hours later.
    ///
    /// Every full 24 hours reached at or above hour 24 is carried into the
    /// date as one day.
    pub fn add_hours(self, hours: u32) -> Self {
        let total = i64::from(self.hour) + i64::from(hours);
        let per_day = i64::from(HOURS_PER_DAY);
        if total < per_day {
            // total >= self.hour, so it still fits in i32.
            return Self {
                hour: total as i32,
                ..self
            };
        }

        let carried = total / per_day;
        Self {
            date: self.date.add_days(carried as u32),
            hour: (total % per_day) as i32,
            ..self
        }
    }

    /// Returns the value `hours` hours earlier.
    ///
    /// Whole days (`hours / 24`) are taken off the date first, then the
    /// remainder off the hour. A negative hour borrows one day per 24 hours
    /// until it is back in 0..=23. An hour that lands exactly on 0 stays on
    /// the same day.
    pub fn subtract_hours(self, hours: u32) -> Self {
        let date = self.date.subtract_days(hours / HOURS_PER_DAY);
        let hour = i64::from(self.hour) - i64::from(hours % HOURS_PER_DAY);
        if hour >= 0 {
            return Self {
                date,
                hour: hour as i32,
                ..self
            };
        }

        let per_day = i64::from(HOURS_PER_DAY);
        let borrowed = hour.div_euclid(per_day).unsigned_abs();
        Self {
            date: date.subtract_days(borrowed as u32),
            hour: hour.rem_euclid(per_day) as i32,
            ..self
        }
    }

    /// Returns the same date and time `years` years later.
    pub fn add_years(self, years: u32) -> Self {
        Self {
            date: self.date.add_years(years),
            ..self
        }
    }

    /// Returns the same date and time `years` years earlier.
    pub fn subtract_years(self, years: u32) -> Self {
        Self {
            date: self.date.subtract_years(years),
            ..self
        }
    }

    /// Raw year-field difference.
    pub fn difference_in_years(self, other: Self) -> u32 {
        self.date.difference_in_years(other.date)
    }

    /// Raw month-field difference.
    pub fn difference_in_months(self, other: Self) -> u32 {
        self.date.difference_in_months(other.date)
    }

    /// Raw day-field difference; see [`Date::difference_in_days`].
    pub fn difference_in_days(self, other: Self) -> u32 {
        self.date.difference_in_days(other.date)
    }

    /// Absolute difference between the hour fields, ignoring the dates.
    pub fn difference_in_hours(self, other: Self) -> u32 {
        self.hour.abs_diff(other.hour)
    }

    /// Absolute difference between the minute fields.
    pub fn difference_in_minutes(self, other: Self) -> u32 {
        self.minute.abs_diff(other.minute)
    }

    /// Absolute difference between the second fields.
    pub fn difference_in_seconds(self, other: Self) -> u32 {
        self.second.abs_diff(other.second)
    }

    /// Renders the date part as `D/M/YYYY`.
    pub fn format_date(self) -> String {
        self.date.format_date()
    }

    /// Renders the time part as `H:M:S` with no zero padding.
    pub fn format_time(self) -> String {
        format!("{}:{}:{}", self.hour, self.minute, self.second)
    }
}

fn check_time_field(field: &'static str, value: i32, max: i32) -> Result<(), CalendarError> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalendarError::InvalidTime { field, value, max })
    }
}

impl From<Date> for DateTime {
    /// Midnight at the start of `date`.
    fn from(date: Date) -> Self {
        Self::from_date(date, 0, 0, 0)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}:{}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for DateTime {
    type Err = CalendarError;

    /// Parses `D/M/Y H:M:S` and validates it with [`DateTime::try_new`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let shape = "expected D/M/Y H:M:S";
        let (date_part, time_part) = input
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| CalendarError::Parse {
                input: input.to_string(),
                reason: shape,
            })?;
        let [day, month, year] = split_fields(date_part, '/', shape)?;
        let [hour, minute, second] = split_fields(time_part, ':', shape)?;
        Self::try_new(day, month, year, hour, minute, second)
    }
}

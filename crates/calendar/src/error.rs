//! Error types for the coursework-calendar crate.

/// Error type for the checked constructors and parsers of this crate.
///
/// Arithmetic on [`Date`](crate::Date) and [`DateTime`](crate::DateTime) never
/// fails; these variants only surface when a caller asks for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number is outside the length of its month.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i32,
        /// The month the day was checked against.
        month: i32,
        /// The year the day was checked against.
        year: i32,
        /// The number of days in that month.
        max_day: i32,
    },

    /// Returned when an hour, minute or second is outside its range.
    #[error("invalid {field}: {value} (must be 0..={max})")]
    InvalidTime {
        /// Which time field was rejected.
        field: &'static str,
        /// The rejected value.
        value: i32,
        /// The largest accepted value for that field.
        max: i32,
    },

    /// Returned when a string does not have the `D/M/Y` or `D/M/Y H:M:S` shape.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2023,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of 2023 (max 28)"
        );
    }

    #[test]
    fn error_invalid_time() {
        let err = CalendarError::InvalidTime {
            field: "hour",
            value: 24,
            max: 23,
        };
        assert_eq!(err.to_string(), "invalid hour: 24 (must be 0..=23)");
    }

    #[test]
    fn error_parse() {
        let err = CalendarError::Parse {
            input: "17-2-1996".to_string(),
            reason: "expected D/M/Y",
        };
        assert_eq!(err.to_string(), "cannot parse \"17-2-1996\": expected D/M/Y");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

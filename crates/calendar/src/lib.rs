//! # coursework-calendar
//!
//! Gregorian date and date-time values with carrying arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["days_in_month()"] --> B["Date"]
//!     B -->|".add_days() / .subtract_days()"| B
//!     B -->|"DateTime::from_date()"| C["DateTime"]
//!     C -->|".add_hours() / .subtract_hours()"| C
//!     C -->|".date()"| B
//!     D["\"D/M/Y H:M:S\""] -->|"parse()"| C
//!     C -->|"Display"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use coursework_calendar::{Date, DateTime, days_in_month};
//!
//! assert_eq!(days_in_month(2, 1996), 29);
//!
//! let date = Date::new(17, 2, 1996);
//! assert_eq!(date.add_days(4), Date::new(21, 2, 1996));
//! assert_eq!(date.subtract_days(4).to_string(), "13/2/1996");
//!
//! let dt: DateTime = "17/2/1996 23:50:50".parse().unwrap();
//! assert_eq!(dt.add_hours(48).to_string(), "19/2/1996 23:50:50");
//! ```
//!
//! ## Field differences
//!
//! The `difference_in_*` methods compare one field at a time and return the
//! absolute difference of the raw values. They are not elapsed durations:
//! January 31 and February 1 are 30 apart by `difference_in_days`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths and the leap-year rule |
//! | `date` | Calendar date |
//! | `datetime` | Date with a time of day |
//! | `error` | Error types |

mod date;
mod datetime;
mod error;
mod month;

pub use date::Date;
pub use datetime::DateTime;
pub use error::CalendarError;
pub use month::{days_in_month, is_leap_year};

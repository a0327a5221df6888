//! Exact-match filters over person records.

use std::fmt;

use crate::person::Person;

/// A single-field filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Country of origin.
    Country(String),
    /// City of residence.
    City(String),
    /// First surname.
    Surname(String),
    /// Given name.
    Name(String),
}

impl Selection {
    /// Returns `true` if `person` has exactly the selected value.
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::Country(c) => person.origin_country() == c.as_str(),
            Self::City(c) => person.address().city() == c.as_str(),
            Self::Surname(s) => person.name().first_surname() == s.as_str(),
            Self::Name(n) => person.name().given() == n.as_str(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country(c) => write!(f, "people from origin country: {c}"),
            Self::City(c) => write!(f, "people living in city: {c}"),
            Self::Surname(s) => write!(f, "people with surname: {s}"),
            Self::Name(n) => write!(f, "people named: {n}"),
        }
    }
}

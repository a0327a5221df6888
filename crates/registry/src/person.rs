//! Person records and their parts.

use std::fmt;

/// Given name plus two surnames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    given: String,
    first_surname: String,
    second_surname: String,
}

impl FullName {
    pub fn new(
        given: impl Into<String>,
        first_surname: impl Into<String>,
        second_surname: impl Into<String>,
    ) -> Self {
        Self {
            given: given.into(),
            first_surname: first_surname.into(),
            second_surname: second_surname.into(),
        }
    }

    pub fn given(&self) -> &str {
        &self.given
    }

    pub fn first_surname(&self) -> &str {
        &self.first_surname
    }

    pub fn second_surname(&self) -> &str {
        &self.second_surname
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.given, self.first_surname, self.second_surname
        )
    }
}

/// Street address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street: String,
    number: u32,
    city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, number: u32, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            number,
            city: city.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.street, self.number, self.city)
    }
}

/// One registry record.
///
/// Renders as `name,country,age,address`, e.g.
/// `Juan Perez Gonzalez,Chile,24,Manso de Velasco 67 Santiago`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: FullName,
    origin_country: String,
    age: u32,
    address: Address,
}

impl Person {
    pub fn new(
        name: FullName,
        origin_country: impl Into<String>,
        age: u32,
        address: Address,
    ) -> Self {
        Self {
            name,
            origin_country: origin_country.into(),
            age,
            address,
        }
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn origin_country(&self) -> &str {
        &self.origin_country
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.name, self.origin_country, self.age, self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> Person {
        Person::new(
            FullName::new("Juan", "Perez", "Gonzalez"),
            "Chile",
            24,
            Address::new("Manso de Velasco", 67, "Santiago"),
        )
    }

    #[test]
    fn display_formats() {
        let p = juan();
        assert_eq!(p.name().to_string(), "Juan Perez Gonzalez");
        assert_eq!(p.address().to_string(), "Manso de Velasco 67 Santiago");
        assert_eq!(
            p.to_string(),
            "Juan Perez Gonzalez,Chile,24,Manso de Velasco 67 Santiago"
        );
    }

    #[test]
    fn accessors() {
        let p = juan();
        assert_eq!(p.name().given(), "Juan");
        assert_eq!(p.name().first_surname(), "Perez");
        assert_eq!(p.name().second_surname(), "Gonzalez");
        assert_eq!(p.origin_country(), "Chile");
        assert_eq!(p.age(), 24);
        assert_eq!(p.address().street(), "Manso de Velasco");
        assert_eq!(p.address().number(), 67);
        assert_eq!(p.address().city(), "Santiago");
    }
}

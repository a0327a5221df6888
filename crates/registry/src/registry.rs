//! Fixed-capacity record store.

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::person::Person;
use crate::selection::Selection;

/// In-memory store holding at most `capacity` people, in insertion order.
///
/// The capacity is fixed when the registry is created. Lookups are linear
/// scans.
///
/// # Example
///
/// ```
/// use coursework_registry::{Address, FullName, Person, Registry, RegistryError};
///
/// let carla = Person::new(
///     FullName::new("Carla", "Perez", "Reyes"),
///     "Perú",
///     28,
///     Address::new("El Progreso", 75, "Arica"),
/// );
///
/// let mut registry = Registry::with_capacity(1);
/// registry.add(carla.clone()).unwrap();
/// assert_eq!(
///     registry.add(carla),
///     Err(RegistryError::CapacityExceeded { capacity: 1 })
/// );
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    records: Vec<Person>,
    capacity: usize,
}

impl Registry {
    /// Creates an empty registry that accepts up to `capacity` records.
    ///
    /// Nothing is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Appends `person` after the existing records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] when the registry already
    /// holds `capacity` records. The registry is left unchanged.
    pub fn add(&mut self, person: Person) -> Result<(), RegistryError> {
        if self.records.len() >= self.capacity {
            warn!(capacity = self.capacity, record = %person, "registry full, record rejected");
            return Err(RegistryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.records.push(person);
        debug!(len = self.records.len(), "record added");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left before [`Registry::add`] starts failing.
    pub fn remaining(&self) -> usize {
        self.capacity - self.records.len()
    }

    pub fn records(&self) -> &[Person] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.records.get(index)
    }

    /// Records matching `selection`, in insertion order.
    pub fn select<'a, 's>(
        &'a self,
        selection: &'s Selection,
    ) -> impl Iterator<Item = &'a Person> + use<'a, 's> {
        self.records.iter().filter(move |p| selection.matches(p))
    }

    /// Runs `selection` and collects the matches.
    #[tracing::instrument(skip_all, fields(selection = %selection))]
    pub fn find_all(&self, selection: &Selection) -> Vec<&Person> {
        let found: Vec<_> = self.select(selection).collect();
        debug!(matches = found.len(), "selection done");
        found
    }

    pub fn select_by_country(&self, country: &str) -> Vec<&Person> {
        self.find_all(&Selection::Country(country.to_string()))
    }

    pub fn select_by_city(&self, city: &str) -> Vec<&Person> {
        self.find_all(&Selection::City(city.to_string()))
    }

    /// Matches on the first surname only.
    pub fn select_by_surname(&self, surname: &str) -> Vec<&Person> {
        self.find_all(&Selection::Surname(surname.to_string()))
    }

    pub fn select_by_name(&self, name: &str) -> Vec<&Person> {
        self.find_all(&Selection::Name(name.to_string()))
    }

    /// One `Record {index}: {person}` line per record.
    pub fn listing(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, p)| format!("Record {i}: {p}"))
            .collect()
    }
}

//! Fixed-capacity in-memory person registry.
//!
//! A [`Registry`] is created with a capacity and rejects inserts past it with
//! [`RegistryError::CapacityExceeded`]. Records are filtered with
//! [`Selection`]s, which compare one field exactly and return matches in
//! insertion order.

mod error;
mod person;
mod registry;
mod selection;

pub use error::RegistryError;
pub use person::{Address, FullName, Person};
pub use registry::Registry;
pub use selection::Selection;

//! Error types for the coursework-registry crate.

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Returned by [`Registry::add`](crate::Registry::add) once every slot is taken.
    #[error("registry is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the registry.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_capacity_exceeded() {
        let err = RegistryError::CapacityExceeded { capacity: 130 };
        assert_eq!(err.to_string(), "registry is full (capacity 130)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<RegistryError>();
    }
}

//! Error types for the coursework-inventory crate.

/// Error type for component construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum InventoryError {
    /// Returned when a processing load is outside 0..=100 percent.
    #[error("invalid processing load: {load}% (must be 0..=100)")]
    InvalidLoad {
        /// The rejected load, in percent.
        load: f32,
    },

    /// Returned when a physical quantity is negative or not finite.
    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidQuantity {
        /// Name of the rejected quantity.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_quantity(field: &'static str, value: f32) -> Result<f32, InventoryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InventoryError::InvalidQuantity { field, value })
    }
}

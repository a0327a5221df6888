//! Shared measurements and the processing / storage category layers.

use crate::error::{InventoryError, check_quantity};

/// Power draw and processing load, common to every component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    power_watts: f32,
    load_percent: f32,
}

impl Load {
    /// Creates a load reading.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] if the power is negative or
    /// not finite, and [`InventoryError::InvalidLoad`] if the load is not in
    /// 0..=100.
    pub fn new(power_watts: f32, load_percent: f32) -> Result<Self, InventoryError> {
        let power_watts = check_quantity("power draw", power_watts)?;
        if !(0.0..=100.0).contains(&load_percent) {
            return Err(InventoryError::InvalidLoad { load: load_percent });
        }
        Ok(Self {
            power_watts,
            load_percent,
        })
    }

    pub fn power_watts(&self) -> f32 {
        self.power_watts
    }

    pub fn load_percent(&self) -> f32 {
        self.load_percent
    }

    pub fn status_line(&self) -> String {
        format!(
            "Power draw: {} W, Processing load: {}%",
            self.power_watts, self.load_percent
        )
    }
}

/// Category layer for compute components.
#[derive(Debug, Clone, PartialEq)]
pub struct Processing {
    load: Load,
    frequency_ghz: f32,
    cores: u32,
}

impl Processing {
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] for a negative or
    /// non-finite frequency.
    pub fn new(load: Load, frequency_ghz: f32, cores: u32) -> Result<Self, InventoryError> {
        Ok(Self {
            load,
            frequency_ghz: check_quantity("frequency", frequency_ghz)?,
            cores,
        })
    }

    pub fn load(&self) -> &Load {
        &self.load
    }

    pub fn frequency_ghz(&self) -> f32 {
        self.frequency_ghz
    }

    pub fn cores(&self) -> u32 {
        self.cores
    }

    /// Base line followed by the frequency and core count.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            self.load.status_line(),
            format!("Frequency: {} GHz, Cores: {}", self.frequency_ghz, self.cores),
        ]
    }
}

/// Category layer for storage components.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    load: Load,
    capacity_gb: f32,
    speed_mb_s: f32,
    interface: String,
}

impl Storage {
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] for a negative or
    /// non-finite capacity or access speed.
    pub fn new(
        load: Load,
        capacity_gb: f32,
        speed_mb_s: f32,
        interface: impl Into<String>,
    ) -> Result<Self, InventoryError> {
        Ok(Self {
            load,
            capacity_gb: check_quantity("capacity", capacity_gb)?,
            speed_mb_s: check_quantity("access speed", speed_mb_s)?,
            interface: interface.into(),
        })
    }

    pub fn load(&self) -> &Load {
        &self.load
    }

    pub fn capacity_gb(&self) -> f32 {
        self.capacity_gb
    }

    pub fn speed_mb_s(&self) -> f32 {
        self.speed_mb_s
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Base line followed by capacity, speed and interface.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            self.load.status_line(),
            format!(
                "Capacity: {} GB, Speed: {} MB/s, Interface: {}",
                self.capacity_gb, self.speed_mb_s, self.interface
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_out_of_range() {
        assert_eq!(
            Load::new(10.0, 101.0).unwrap_err(),
            InventoryError::InvalidLoad { load: 101.0 }
        );
        assert_eq!(
            Load::new(-1.0, 50.0).unwrap_err(),
            InventoryError::InvalidQuantity {
                field: "power draw",
                value: -1.0,
            }
        );
    }

    #[test]
    fn load_line_drops_trailing_zeros() {
        let load = Load::new(70.0, 40.0).unwrap();
        assert_eq!(load.status_line(), "Power draw: 70 W, Processing load: 40%");
        let load = Load::new(2.5, 20.0).unwrap();
        assert_eq!(load.status_line(), "Power draw: 2.5 W, Processing load: 20%");
    }

    #[test]
    fn processing_lines() {
        let p = Processing::new(Load::new(70.0, 40.0).unwrap(), 3.5, 8).unwrap();
        assert_eq!(
            p.status_lines(),
            vec![
                "Power draw: 70 W, Processing load: 40%".to_string(),
                "Frequency: 3.5 GHz, Cores: 8".to_string(),
            ]
        );
    }

    #[test]
    fn storage_lines() {
        let s = Storage::new(Load::new(9.0, 30.0).unwrap(), 1000.0, 150.0, "SATA").unwrap();
        assert_eq!(s.interface(), "SATA");
        assert_eq!(
            s.status_lines()[1],
            "Capacity: 1000 GB, Speed: 150 MB/s, Interface: SATA"
        );
    }

    #[test]
    fn storage_rejects_negative_capacity() {
        let load = Load::new(9.0, 30.0).unwrap();
        assert!(matches!(
            Storage::new(load, -1.0, 150.0, "SATA"),
            Err(InventoryError::InvalidQuantity { field: "capacity", .. })
        ));
    }
}

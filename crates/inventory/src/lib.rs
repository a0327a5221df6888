//! Hardware component inventory.
//!
//! Components are built in layers: a [`Load`] reading shared by everything,
//! a category ([`Processing`] or [`Storage`]) on top, and a concrete kind
//! on top of that. Each layer contributes lines to the status report.
//!
//! ```
//! use coursework_inventory::{Cpu, Device, Load, Processing};
//!
//! let processing = Processing::new(Load::new(70.0, 40.0).unwrap(), 3.5, 8).unwrap();
//! let cpu = Cpu::new(processing, 1, 16);
//! assert_eq!(cpu.status()[1], "Frequency: 3.5 GHz, Cores: 8");
//! ```

mod category;
mod device;
mod error;
mod inventory;

pub use category::{Load, Processing, Storage};
pub use device::{Component, Cpu, Device, Gpu, Hdd, Ssd, Sshd};
pub use error::InventoryError;
pub use inventory::{Entry, Inventory};

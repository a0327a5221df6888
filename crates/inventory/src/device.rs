//! Concrete components and the [`Device`] reporting trait.

use crate::category::{Processing, Storage};
use crate::error::{InventoryError, check_quantity};

/// Anything that can report its status as text lines.
pub trait Device {
    /// Short name of the component kind, e.g. `"CPU"`.
    fn kind(&self) -> &'static str;

    /// Lines shared with the component's category (base load plus
    /// processing or storage figures).
    fn category_status(&self) -> Vec<String>;

    /// Lines specific to the concrete component.
    fn detail_status(&self) -> Vec<String>;

    /// Category lines followed by detail lines.
    fn status(&self) -> Vec<String> {
        let mut lines = self.category_status();
        lines.extend(self.detail_status());
        lines
    }
}

/// Central processor.
#[derive(Debug, Clone, PartialEq)]
pub struct Cpu {
    processing: Processing,
    processor_number: u32,
    l3_cache_mb: u32,
}

impl Cpu {
    pub fn new(processing: Processing, processor_number: u32, l3_cache_mb: u32) -> Self {
        Self {
            processing,
            processor_number,
            l3_cache_mb,
        }
    }

    pub fn processing(&self) -> &Processing {
        &self.processing
    }
}

impl Device for Cpu {
    fn kind(&self) -> &'static str {
        "CPU"
    }

    fn category_status(&self) -> Vec<String> {
        self.processing.status_lines()
    }

    fn detail_status(&self) -> Vec<String> {
        vec![format!(
            "CPU - Processor number: {}, L3 cache: {} MB",
            self.processor_number, self.l3_cache_mb
        )]
    }
}

/// Graphics processor.
#[derive(Debug, Clone, PartialEq)]
pub struct Gpu {
    processing: Processing,
    bandwidth_gb_s: f32,
}

impl Gpu {
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] for a negative or
    /// non-finite bandwidth.
    pub fn new(processing: Processing, bandwidth_gb_s: f32) -> Result<Self, InventoryError> {
        Ok(Self {
            processing,
            bandwidth_gb_s: check_quantity("memory bandwidth", bandwidth_gb_s)?,
        })
    }

    pub fn processing(&self) -> &Processing {
        &self.processing
    }
}

impl Device for Gpu {
    fn kind(&self) -> &'static str {
        "GPU"
    }

    fn category_status(&self) -> Vec<String> {
        self.processing.status_lines()
    }

    fn detail_status(&self) -> Vec<String> {
        vec![format!("GPU - Memory bandwidth: {} GB/s", self.bandwidth_gb_s)]
    }
}

/// Spinning hard disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Hdd {
    storage: Storage,
    rpm: u32,
    cache_mb: u32,
}

impl Hdd {
    pub fn new(storage: Storage, rpm: u32, cache_mb: u32) -> Self {
        Self {
            storage,
            rpm,
            cache_mb,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl Device for Hdd {
    fn kind(&self) -> &'static str {
        "HDD"
    }

    fn category_status(&self) -> Vec<String> {
        self.storage.status_lines()
    }

    fn detail_status(&self) -> Vec<String> {
        vec![format!(
            "Rotation speed: {} rpm, Cache: {} MB",
            self.rpm, self.cache_mb
        )]
    }
}

/// Solid-state drive.
#[derive(Debug, Clone, PartialEq)]
pub struct Ssd {
    storage: Storage,
    memory_type: String,
}

impl Ssd {
    pub fn new(storage: Storage, memory_type: impl Into<String>) -> Self {
        Self {
            storage,
            memory_type: memory_type.into(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl Device for Ssd {
    fn kind(&self) -> &'static str {
        "SSD"
    }

    fn category_status(&self) -> Vec<String> {
        self.storage.status_lines()
    }

    fn detail_status(&self) -> Vec<String> {
        vec![format!("Memory type: {}", self.memory_type)]
    }
}

/// Hybrid drive: a disk half and a flash half over one storage reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Sshd {
    hdd: Hdd,
    ssd: Ssd,
}

impl Sshd {
    pub fn new(storage: Storage, rpm: u32, cache_mb: u32, memory_type: impl Into<String>) -> Self {
        Self {
            hdd: Hdd::new(storage.clone(), rpm, cache_mb),
            ssd: Ssd::new(storage, memory_type),
        }
    }

    pub fn hdd(&self) -> &Hdd {
        &self.hdd
    }

    pub fn ssd(&self) -> &Ssd {
        &self.ssd
    }
}

impl Device for Sshd {
    fn kind(&self) -> &'static str {
        "SSHD"
    }

    fn category_status(&self) -> Vec<String> {
        self.ssd.category_status()
    }

    fn detail_status(&self) -> Vec<String> {
        let mut lines = self.hdd.detail_status();
        lines.extend(self.ssd.detail_status());
        lines
    }
}

/// Any of the supported component kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Cpu(Cpu),
    Gpu(Gpu),
    Hdd(Hdd),
    Ssd(Ssd),
    Sshd(Sshd),
}

impl Component {
    fn as_device(&self) -> &dyn Device {
        match self {
            Self::Cpu(c) => c,
            Self::Gpu(c) => c,
            Self::Hdd(c) => c,
            Self::Ssd(c) => c,
            Self::Sshd(c) => c,
        }
    }
}

impl Device for Component {
    fn kind(&self) -> &'static str {
        self.as_device().kind()
    }

    fn category_status(&self) -> Vec<String> {
        self.as_device().category_status()
    }

    fn detail_status(&self) -> Vec<String> {
        self.as_device().detail_status()
    }
}

impl From<Cpu> for Component {
    fn from(c: Cpu) -> Self {
        Self::Cpu(c)
    }
}

impl From<Gpu> for Component {
    fn from(c: Gpu) -> Self {
        Self::Gpu(c)
    }
}

impl From<Hdd> for Component {
    fn from(c: Hdd) -> Self {
        Self::Hdd(c)
    }
}

impl From<Ssd> for Component {
    fn from(c: Ssd) -> Self {
        Self::Ssd(c)
    }
}

impl From<Sshd> for Component {
    fn from(c: Sshd) -> Self {
        Self::Sshd(c)
    }
}

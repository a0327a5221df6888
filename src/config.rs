use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level coursework configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseworkConfig {
    /// Date arithmetic walkthrough settings.
    #[serde(default)]
    pub dates: DatesToml,

    /// Component inventory contents.
    #[serde(default)]
    pub inventory: InventoryToml,

    /// Record store capacity, records and selections.
    #[serde(default)]
    pub registry: RegistryToml,
}

impl CourseworkConfig {
    /// Reads and parses `path`, or returns the built-in defaults when `path`
    /// is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesToml {
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default = "default_reference")]
    pub reference: String,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_hours")]
    pub hours: u32,
    #[serde(default = "default_years")]
    pub years: u32,
}

impl Default for DatesToml {
    fn default() -> Self {
        Self {
            base: default_base(),
            reference: default_reference(),
            days: default_days(),
            hours: default_hours(),
            years: default_years(),
        }
    }
}

fn default_base() -> String {
    "17/2/1996 23:50:50".to_string()
}
fn default_reference() -> String {
    "26/11/1986 18:45:0".to_string()
}
fn default_days() -> u32 {
    4
}
fn default_hours() -> u32 {
    48
}
fn default_years() -> u32 {
    19
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryToml {
    #[serde(default = "default_components")]
    pub components: Vec<ComponentToml>,
}

impl Default for InventoryToml {
    fn default() -> Self {
        Self {
            components: default_components(),
        }
    }
}

/// One inventory component, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComponentToml {
    Cpu {
        label: Option<String>,
        power_watts: f32,
        load_percent: f32,
        frequency_ghz: f32,
        cores: u32,
        processor_number: u32,
        l3_cache_mb: u32,
    },
    Gpu {
        label: Option<String>,
        power_watts: f32,
        load_percent: f32,
        frequency_ghz: f32,
        cores: u32,
        bandwidth_gb_s: f32,
    },
    Hdd {
        label: Option<String>,
        power_watts: f32,
        load_percent: f32,
        capacity_gb: f32,
        speed_mb_s: f32,
        interface: String,
        rpm: u32,
        cache_mb: u32,
    },
    Ssd {
        label: Option<String>,
        power_watts: f32,
        load_percent: f32,
        capacity_gb: f32,
        speed_mb_s: f32,
        interface: String,
        memory_type: String,
    },
    Sshd {
        label: Option<String>,
        power_watts: f32,
        load_percent: f32,
        capacity_gb: f32,
        speed_mb_s: f32,
        interface: String,
        rpm: u32,
        cache_mb: u32,
        memory_type: String,
    },
}

fn default_components() -> Vec<ComponentToml> {
    vec![
        ComponentToml::Cpu {
            label: None,
            power_watts: 70.0,
            load_percent: 40.0,
            frequency_ghz: 3.5,
            cores: 8,
            processor_number: 1,
            l3_cache_mb: 16,
        },
        ComponentToml::Gpu {
            label: None,
            power_watts: 130.0,
            load_percent: 60.0,
            frequency_ghz: 1.5,
            cores: 2048,
            bandwidth_gb_s: 448.0,
        },
        ComponentToml::Hdd {
            label: None,
            power_watts: 9.0,
            load_percent: 30.0,
            capacity_gb: 1000.0,
            speed_mb_s: 150.0,
            interface: "SATA".to_string(),
            rpm: 7200,
            cache_mb: 64,
        },
        ComponentToml::Ssd {
            label: None,
            power_watts: 2.5,
            load_percent: 20.0,
            capacity_gb: 500.0,
            speed_mb_s: 550.0,
            interface: "NVMe".to_string(),
            memory_type: "TLC".to_string(),
        },
        ComponentToml::Sshd {
            label: None,
            power_watts: 9.0,
            load_percent: 50.0,
            capacity_gb: 2000.0,
            speed_mb_s: 200.0,
            interface: "SATA".to_string(),
            rpm: 7200,
            cache_mb: 64,
            memory_type: "MLC".to_string(),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryToml {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub records: Vec<PersonToml>,
    #[serde(default = "default_selections")]
    pub selections: Vec<SelectionToml>,
}

impl Default for RegistryToml {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            records: Vec::new(),
            selections: default_selections(),
        }
    }
}

fn default_capacity() -> usize {
    130
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonToml {
    pub given: String,
    pub first_surname: String,
    pub second_surname: String,
    pub country: String,
    pub age: u32,
    pub street: String,
    pub number: u32,
    pub city: String,
}

/// Field a selection filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionField {
    Country,
    City,
    Surname,
    Name,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionToml {
    pub by: SelectionField,
    pub value: String,
}

fn default_selections() -> Vec<SelectionToml> {
    [
        (SelectionField::Country, "Perú"),
        (SelectionField::City, "Rancagua"),
        (SelectionField::Surname, "Garcia"),
        (SelectionField::Name, "Carla"),
    ]
    .into_iter()
    .map(|(by, value)| SelectionToml {
        by,
        value: value.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = CourseworkConfig::load(None).unwrap();
        assert_eq!(config.dates.base, "17/2/1996 23:50:50");
        assert_eq!(config.dates.hours, 48);
        assert_eq!(config.inventory.components.len(), 5);
        assert_eq!(config.registry.capacity, 130);
        assert!(config.registry.records.is_empty());
        assert_eq!(config.registry.selections.len(), 4);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: CourseworkConfig = toml::from_str("").unwrap();
        assert_eq!(config.dates.years, 19);
        assert_eq!(config.inventory.components.len(), 5);
    }

    #[test]
    fn parses_sections() {
        let toml_str = r#"
            [dates]
            base = "1/1/2000 0:0:0"
            days = 10

            [[inventory.components]]
            kind = "ssd"
            label = "Scratch disk"
            power_watts = 2.5
            load_percent = 20
            capacity_gb = 500
            speed_mb_s = 550
            interface = "NVMe"
            memory_type = "TLC"

            [registry]
            capacity = 2

            [[registry.records]]
            given = "Carla"
            first_surname = "Perez"
            second_surname = "Reyes"
            country = "Perú"
            age = 28
            street = "El Progreso"
            number = 75
            city = "Arica"

            [[registry.selections]]
            by = "city"
            value = "Arica"
        "#;
        let config: CourseworkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dates.base, "1/1/2000 0:0:0");
        assert_eq!(config.dates.days, 10);
        assert_eq!(config.dates.hours, 48);
        assert_eq!(config.inventory.components.len(), 1);
        assert!(matches!(
            &config.inventory.components[0],
            ComponentToml::Ssd { label: Some(l), .. } if l == "Scratch disk"
        ));
        assert_eq!(config.registry.capacity, 2);
        assert_eq!(config.registry.records[0].city, "Arica");
        assert_eq!(config.registry.selections.len(), 1);
        assert_eq!(config.registry.selections[0].by, SelectionField::City);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<CourseworkConfig>("[dates]\nmonths = 3\n").unwrap_err();
        assert!(err.to_string().contains("months"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\ncapacity = 7").unwrap();
        let config = CourseworkConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.registry.capacity, 7);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = CourseworkConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}

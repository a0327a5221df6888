//! Conversions from TOML config structs to library types.

use anyhow::{Context, Result};

use coursework_calendar::DateTime;
use coursework_inventory::{Cpu, Gpu, Hdd, Inventory, Load, Processing, Ssd, Sshd, Storage};
use coursework_registry::{Address, FullName, Person, Selection};

use crate::config::{ComponentToml, PersonToml, SelectionField, SelectionToml};

/// Parses a `D/M/Y H:M:S` config value.
pub fn parse_date_time(field: &str, value: &str) -> Result<DateTime> {
    value
        .parse()
        .with_context(|| format!("invalid [dates].{field}: {value:?}"))
}

/// Builds the inventory, labelling unlabelled components by kind.
pub fn build_inventory(components: &[ComponentToml]) -> Result<Inventory> {
    let mut inventory = Inventory::new();
    for (i, component) in components.iter().enumerate() {
        add_component(&mut inventory, component)
            .with_context(|| format!("invalid inventory component #{i}"))?;
    }
    Ok(inventory)
}

fn add_component(inventory: &mut Inventory, component: &ComponentToml) -> Result<()> {
    match component.clone() {
        ComponentToml::Cpu {
            label,
            power_watts,
            load_percent,
            frequency_ghz,
            cores,
            processor_number,
            l3_cache_mb,
        } => {
            let processing =
                Processing::new(Load::new(power_watts, load_percent)?, frequency_ghz, cores)?;
            let label = label.unwrap_or_else(|| "CPU".to_string());
            inventory.push(label, Cpu::new(processing, processor_number, l3_cache_mb));
        }
        ComponentToml::Gpu {
            label,
            power_watts,
            load_percent,
            frequency_ghz,
            cores,
            bandwidth_gb_s,
        } => {
            let processing =
                Processing::new(Load::new(power_watts, load_percent)?, frequency_ghz, cores)?;
            let label = label.unwrap_or_else(|| "GPU".to_string());
            inventory.push(label, Gpu::new(processing, bandwidth_gb_s)?);
        }
        ComponentToml::Hdd {
            label,
            power_watts,
            load_percent,
            capacity_gb,
            speed_mb_s,
            interface,
            rpm,
            cache_mb,
        } => {
            let storage = Storage::new(
                Load::new(power_watts, load_percent)?,
                capacity_gb,
                speed_mb_s,
                interface,
            )?;
            let label = label.unwrap_or_else(|| "HDD".to_string());
            inventory.push(label, Hdd::new(storage, rpm, cache_mb));
        }
        ComponentToml::Ssd {
            label,
            power_watts,
            load_percent,
            capacity_gb,
            speed_mb_s,
            interface,
            memory_type,
        } => {
            let storage = Storage::new(
                Load::new(power_watts, load_percent)?,
                capacity_gb,
                speed_mb_s,
                interface,
            )?;
            let label = label.unwrap_or_else(|| "SSD".to_string());
            inventory.push(label, Ssd::new(storage, memory_type));
        }
        ComponentToml::Sshd {
            label,
            power_watts,
            load_percent,
            capacity_gb,
            speed_mb_s,
            interface,
            rpm,
            cache_mb,
            memory_type,
        } => {
            let storage = Storage::new(
                Load::new(power_watts, load_percent)?,
                capacity_gb,
                speed_mb_s,
                interface,
            )?;
            let label = label.unwrap_or_else(|| "SSHD".to_string());
            inventory.push(label, Sshd::new(storage, rpm, cache_mb, memory_type));
        }
    }
    Ok(())
}

pub fn build_person(person: &PersonToml) -> Person {
    Person::new(
        FullName::new(
            &person.given,
            &person.first_surname,
            &person.second_surname,
        ),
        &person.country,
        person.age,
        Address::new(&person.street, person.number, &person.city),
    )
}

pub fn build_selection(selection: &SelectionToml) -> Selection {
    let value = selection.value.clone();
    match selection.by {
        SelectionField::Country => Selection::Country(value),
        SelectionField::City => Selection::City(value),
        SelectionField::Surname => Selection::Surname(value),
        SelectionField::Name => Selection::Name(value),
    }
}

//! Records command: fill the registry and run selections.

use std::io::Write;

use anyhow::Result;
use tracing::{info, info_span, warn};

use coursework_registry::{Registry, Selection};

use crate::cli::RecordsArgs;
use crate::config::RegistryToml;
use crate::convert;

/// Load every configured record, then write the listing and each selection
/// to `out`.
///
/// Records past the capacity are reported on `out` and skipped.
pub fn run(args: RecordsArgs, config: &RegistryToml, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("records").entered();

    let capacity = args.capacity.unwrap_or(config.capacity);
    let mut registry = Registry::with_capacity(capacity);
    let mut rejected = 0usize;
    for record in &config.records {
        if let Err(e) = registry.add(convert::build_person(record)) {
            rejected += 1;
            writeln!(out, "Error: {e}")?;
        }
    }
    if rejected > 0 {
        warn!(rejected, capacity, "some records did not fit");
    }
    info!(n_records = registry.len(), capacity, "registry loaded");

    for line in registry.listing() {
        writeln!(out, "{line}")?;
    }

    for selection in selections(&args, config) {
        writeln!(out, "***** {selection} *****")?;
        for person in registry.select(&selection) {
            writeln!(out, "{person}")?;
        }
    }
    Ok(())
}

/// Selections from the command line, or from config when no flag is given.
fn selections(args: &RecordsArgs, config: &RegistryToml) -> Vec<Selection> {
    let from_flags: Vec<Selection> = [
        args.country.clone().map(Selection::Country),
        args.city.clone().map(Selection::City),
        args.surname.clone().map(Selection::Surname),
        args.name.clone().map(Selection::Name),
    ]
    .into_iter()
    .flatten()
    .collect();

    if from_flags.is_empty() {
        config.selections.iter().map(convert::build_selection).collect()
    } else {
        from_flags
    }
}

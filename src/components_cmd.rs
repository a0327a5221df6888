//! Components command: inventory status report.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::config::InventoryToml;
use crate::convert;

/// Build the configured inventory and write its report to `out`.
pub fn run(config: &InventoryToml, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("components").entered();

    let inventory =
        convert::build_inventory(&config.components).context("failed to build inventory")?;
    info!(n_components = inventory.len(), "inventory built");

    for line in inventory.report() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

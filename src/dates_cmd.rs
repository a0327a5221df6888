//! Dates command: date and time arithmetic walkthrough.

use std::io::Write;

use anyhow::Result;
use tracing::{info, info_span};

use coursework_calendar::DateTime;

use crate::cli::DatesArgs;
use crate::config::DatesToml;
use crate::convert;

/// Run the walkthrough, writing the report to `out`.
pub fn run(args: DatesArgs, config: &DatesToml, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("dates").entered();

    let base = match args.base {
        Some(base) => base,
        None => convert::parse_date_time("base", &config.base)?,
    };
    let reference = match args.reference {
        Some(reference) => reference,
        None => convert::parse_date_time("reference", &config.reference)?,
    };
    let days = args.days.unwrap_or(config.days);
    let hours = args.hours.unwrap_or(config.hours);
    let years = args.years.unwrap_or(config.years);
    info!(%base, %reference, days, hours, years, "running date walkthrough");

    write_report(base, reference, days, hours, years, out)?;
    Ok(())
}

fn write_report(
    base: DateTime,
    reference: DateTime,
    days: u32,
    hours: u32,
    years: u32,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "base: {base}")?;
    writeln!(out, "reference: {reference}")?;
    writeln!(out)?;

    writeln!(out, "base + {days} days: {}", base.add_days(days))?;
    writeln!(out, "base - {days} days: {}", base.subtract_days(days))?;
    writeln!(out)?;

    let fields = [
        ("years", reference.difference_in_years(base)),
        ("months", reference.difference_in_months(base)),
        ("days", reference.difference_in_days(base)),
        ("hours", reference.difference_in_hours(base)),
        ("minutes", reference.difference_in_minutes(base)),
        ("seconds", reference.difference_in_seconds(base)),
    ];
    for (unit, diff) in fields {
        writeln!(out, "{unit} field difference: {diff}")?;
    }
    writeln!(out)?;

    writeln!(out, "base + {hours} hours: {}", base.add_hours(hours))?;
    writeln!(out, "base - {hours} hours: {}", base.subtract_hours(hours))?;
    writeln!(out)?;

    writeln!(out, "base + {years} years: {}", base.add_years(years))?;
    writeln!(out, "base - {years} years: {}", base.subtract_years(years))?;
    writeln!(out)?;

    writeln!(out, "dates equal: {}", base.date() == reference.date())?;
    writeln!(out, "date-times equal: {}", base == reference)?;
    Ok(())
}

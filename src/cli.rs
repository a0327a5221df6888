use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coursework_calendar::DateTime;

/// Coursework exercises: calendar arithmetic, component inventory, record store.
#[derive(Parser)]
#[command(
    name = "coursework",
    version,
    about = "Calendar arithmetic, component inventory and record store exercises"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Built-in defaults are used without one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk through date and time arithmetic on two date-times.
    Dates(DatesArgs),
    /// Print the status report of the component inventory.
    Components,
    /// Load the record store and run the configured selections.
    Records(RecordsArgs),
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args, Default)]
pub struct DatesArgs {
    /// Date-time the arithmetic is applied to, as `D/M/Y H:M:S`.
    #[arg(long)]
    pub base: Option<DateTime>,

    /// Date-time the base is compared with, as `D/M/Y H:M:S`.
    #[arg(long)]
    pub reference: Option<DateTime>,

    /// Days to add and subtract.
    #[arg(long)]
    pub days: Option<u32>,

    /// Hours to add and subtract.
    #[arg(long)]
    pub hours: Option<u32>,

    /// Years to add and subtract.
    #[arg(long)]
    pub years: Option<u32>,
}

/// Arguments for the `records` subcommand.
///
/// Any selection flag replaces the selections from the config file.
#[derive(clap::Args, Default)]
pub struct RecordsArgs {
    /// Override the registry capacity from config.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Select people by country of origin.
    #[arg(long)]
    pub country: Option<String>,

    /// Select people by city of residence.
    #[arg(long)]
    pub city: Option<String>,

    /// Select people by first surname.
    #[arg(long)]
    pub surname: Option<String>,

    /// Select people by given name.
    #[arg(long)]
    pub name: Option<String>,
}

mod cli;
mod components_cmd;
mod config;
mod convert;
mod dates_cmd;
mod logging;
mod records_cmd;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::CourseworkConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CourseworkConfig::load(cli.config.as_deref())?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Dates(args) => dates_cmd::run(args, &config.dates, &mut out),
        Command::Components => components_cmd::run(&config.inventory, &mut out),
        Command::Records(args) => records_cmd::run(args, &config.registry, &mut out),
    }
}

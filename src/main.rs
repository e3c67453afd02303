use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod contact;
mod csv;
mod error;
mod frequency;
mod report;
mod table;
mod writer;

use crate::config::Cli;

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let targets = cli.output_targets(&mut io::stdin().lock(), &mut io::stdout())?;

    let table = csv::read_csv(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let names = report::names_by_frequency(&table)?;
    writer::write_records(&targets.names, &names)
        .with_context(|| format!("writing {}", targets.names.display()))?;

    let users = contact::extract(&table)?;
    info!("{} of {} contacts kept", users.len(), table.rows.len());
    let addresses = report::addresses_by_street(&users);
    writer::write_records(&targets.addresses, &addresses)
        .with_context(|| format!("writing {}", targets.addresses.display()))?;

    println!("Successfully imported and processed files.");
    Ok(())
}

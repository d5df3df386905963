//! `hours` command

use std::io;

use clap::Args;
use jiff::civil::DateTime;
use pizzeria::{
    availability::{Availability, Schedule},
    config::StoreConfig,
};

#[derive(Debug, Args)]
pub(crate) struct HoursArgs {
    /// Wall-clock time to check instead of now, e.g. 2025-10-17T23:30
    #[arg(long)]
    at: Option<DateTime>,
}

pub(crate) fn run(
    store: &StoreConfig,
    args: &HoursArgs,
    mut out: impl io::Write,
) -> anyhow::Result<()> {
    let schedule = Schedule::standard();

    let status = match args.at {
        Some(at) => schedule.status(at),
        None => schedule.status_now(&store.time_zone()?),
    };

    match status {
        Availability::Open => writeln!(out, "{}", Availability::Open)?,
        closed @ Availability::Closed {
            next_opening: Some(next),
        } => writeln!(out, "{closed} - Abrimos {next}")?,
        closed @ Availability::Closed { next_opening: None } => writeln!(out, "{closed}")?,
    }

    writeln!(out, "\nHorário de funcionamento:")?;

    for line in schedule.hours() {
        writeln!(out, "  {line}")?;
    }

    Ok(())
}

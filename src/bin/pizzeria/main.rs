//! Pizzeria CLI

use std::io;

use clap::{Parser, Subcommand};
use pizzeria::config::{LoggingConfig, StoreConfig};

mod hours;
mod logging;
mod menu;
mod order;

#[derive(Debug, Parser)]
#[command(name = "pizzeria", about = "Pizzeria storefront", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the menu
    Menu(menu::MenuArgs),

    /// Show whether the store is open and its opening hours
    Hours(hours::HoursArgs),

    /// Build a cart and send the order
    Order(order::OrderArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.logging)?;

    let out = io::stdout().lock();

    match cli.command {
        Commands::Menu(args) => menu::run(&cli.store, &args, out),
        Commands::Hours(args) => hours::run(&cli.store, &args, out),
        Commands::Order(args) => order::run(&cli.store, args, out),
    }
}

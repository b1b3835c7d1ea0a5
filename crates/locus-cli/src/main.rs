//! Locus CLI
//!
//! Command-line interface for computing data file locations

use clap::{Parser, Subcommand};
use locus_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "locus")]
#[command(about = "Locus - data file location assignment for tables", long_about = None)]
struct Cli {
    /// Emit JSON logs instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the location assigned to each file name
    Locate(commands::locate::LocateArgs),
    /// Print the table-relative form of each path
    Relativize(commands::relativize::RelativizeArgs),
    /// Print the object storage hash prefix of each name
    Hash(commands::hash::HashArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Locate(args) => commands::locate::execute(args),
        Commands::Relativize(args) => commands::relativize::execute(args),
        Commands::Hash(args) => commands::hash::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

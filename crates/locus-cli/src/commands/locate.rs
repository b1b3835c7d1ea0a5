//! Locate command
//!
//! Usage: locus locate <TABLE_LOCATION> <FILENAME>... [--partition <PATH>] [--prop KEY=VALUE]...

use clap::Args;
use locus_core::{locations_for, LocationStrategy};

use super::properties::PropertyArgs;

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Table root location
    pub table_location: String,

    /// Data file names to place
    #[arg(required = true)]
    pub filenames: Vec<String>,

    /// Rendered partition path (e.g. "dt=2024-01-01/hour=3")
    #[arg(long)]
    pub partition: Option<String>,

    #[command(flatten)]
    pub properties: PropertyArgs,
}

/// Execute locate command
pub fn execute(args: LocateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let props = args.properties.load()?;
    let strategy = locations_for(&args.table_location, &props)?;

    for filename in &args.filenames {
        match strategy.new_data_location(args.partition.as_deref(), filename) {
            Some(location) => println!("{}", location),
            None => eprintln!("warning: no location assigned for {}", filename),
        }
    }

    Ok(())
}

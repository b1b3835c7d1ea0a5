//! Relativize command
//!
//! Usage: locus relativize <TABLE_LOCATION> <PATH>... [--prop KEY=VALUE]...

use clap::Args;
use locus_core::{locations_for, LocationRelativizer};

use super::properties::PropertyArgs;

#[derive(Debug, Args)]
pub struct RelativizeArgs {
    /// Table root location
    pub table_location: String,

    /// Absolute paths to translate
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub properties: PropertyArgs,
}

/// Execute relativize command
///
/// Stops at the first path outside the configured prefix.
pub fn execute(args: RelativizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let props = args.properties.load()?;
    let strategy = locations_for(&args.table_location, &props)?;

    for path in &args.paths {
        println!("{}", strategy.relative_path(path)?);
    }

    Ok(())
}

//! Hash command
//!
//! Usage: locus hash <NAME>...

use clap::Args;
use locus_core::hashing::object_store_hash;

#[derive(Debug, Args)]
pub struct HashArgs {
    /// Partition-qualified file names
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Execute hash command
pub fn execute(args: HashArgs) -> Result<(), Box<dyn std::error::Error>> {
    for name in &args.names {
        println!("{}\t{}", object_store_hash(name), name);
    }
    Ok(())
}

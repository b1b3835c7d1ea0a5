//! Table property flags shared by commands

use clap::Args;
use locus_core_types::TableProperties;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PropertyArgs {
    /// Table property as KEY=VALUE (repeatable, overrides --props-file)
    #[arg(short = 'p', long = "prop", value_name = "KEY=VALUE")]
    pub props: Vec<String>,

    /// JSON object of table properties
    #[arg(long, value_name = "FILE")]
    pub props_file: Option<PathBuf>,
}

impl PropertyArgs {
    /// Merge the properties file and `--prop` flags
    pub fn load(&self) -> Result<TableProperties, Box<dyn std::error::Error>> {
        let mut props = match &self.props_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str::<TableProperties>(&raw)
                    .map_err(|e| format!("invalid properties file {}: {}", path.display(), e))?
            }
            None => TableProperties::new(),
        };

        let flags = self
            .props
            .iter()
            .map(|entry| parse_prop(entry))
            .collect::<Result<TableProperties, _>>()?;
        props.extend(flags);
        Ok(props)
    }
}

fn parse_prop(entry: &str) -> Result<(String, String), String> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid property {:?}, expected KEY=VALUE", entry)),
    }
}

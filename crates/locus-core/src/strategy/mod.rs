//! Location strategies
//!
//! A strategy is bound to one table for its lifetime and computes the
//! destination of every new data file written into it. Roots are fixed at
//! construction; computing a location never mutates the strategy.

mod default;
mod null;
mod object_store;

pub use default::DefaultLocationStrategy;
pub use null::NullLocationStrategy;
pub use object_store::ObjectStoreLocationStrategy;

use std::fmt;

use crate::errors::Result;

/// Variant tag for a strategy, used in logs and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Default,
    ObjectStore,
    Null,
    Custom,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Default => "default",
            StrategyKind::ObjectStore => "object_store",
            StrategyKind::Null => "null",
            StrategyKind::Custom => "custom",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation between absolute and table-relative paths
pub trait LocationRelativizer: Send + Sync {
    /// Whether paths are recorded relative to a prefix
    fn is_relative(&self) -> bool;

    /// Relative form of `path`
    ///
    /// # Errors
    ///
    /// Returns `LocationError::InvalidPrefix` when relative mode is on and
    /// `path` does not start with the configured prefix.
    fn relative_path(&self, path: &str) -> Result<String>;

    /// Absolute form of `path`
    fn absolute_path(&self, path: &str) -> String;
}

/// Computes destination paths for new data files of one table
///
/// Implementations must be deterministic: the same arguments always yield
/// the same location for a given instance.
pub trait LocationStrategy: LocationRelativizer + fmt::Debug {
    /// Location for a new data file
    ///
    /// `partition_path` is the rendered partition fragment (for example
    /// `"dt=2024-01-01/hour=3"`), `None` for unpartitioned writes. Returns
    /// `None` when this strategy does not assign locations.
    fn new_data_location(&self, partition_path: Option<&str>, filename: &str) -> Option<String>;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Custom
    }
}

/// Relativizer that never relativizes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRelativizer;

impl LocationRelativizer for NoopRelativizer {
    fn is_relative(&self) -> bool {
        false
    }

    fn relative_path(&self, path: &str) -> Result<String> {
        Ok(path.to_string())
    }

    fn absolute_path(&self, path: &str) -> String {
        path.to_string()
    }
}

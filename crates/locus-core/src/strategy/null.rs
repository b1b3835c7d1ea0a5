use super::{LocationRelativizer, LocationStrategy, StrategyKind};
use crate::errors::Result;

/// Strategy that assigns no locations
///
/// For writers whose file placement is decided by another layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocationStrategy;

impl LocationStrategy for NullLocationStrategy {
    fn new_data_location(&self, _partition_path: Option<&str>, _filename: &str) -> Option<String> {
        None
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Null
    }
}

impl LocationRelativizer for NullLocationStrategy {
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

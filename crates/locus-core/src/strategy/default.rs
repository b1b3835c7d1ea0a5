use locus_core_types::TableProperties;

use super::{LocationRelativizer, LocationStrategy, StrategyKind};
use crate::config::LocationConfig;
use crate::errors::{LocationError, Result};
use crate::path_util::{normalize, strip_trailing_slash};

/// Hierarchical layout under a data directory
///
/// Files land at `{data_location}/{partition}/{filename}`. Optionally records
/// paths relative to a lower-cased prefix for metadata portability.
#[derive(Debug, Clone)]
pub struct DefaultLocationStrategy {
    data_location: String,
    use_relative_path: bool,
    prefix: String,
}

impl DefaultLocationStrategy {
    pub fn new(table_location: &str, props: &TableProperties) -> Self {
        Self::from_config(table_location, &LocationConfig::from_properties(props))
    }

    pub fn from_config(table_location: &str, config: &LocationConfig) -> Self {
        let table_location = strip_trailing_slash(table_location);
        let data_location = strip_trailing_slash(&config.data_location(table_location)).to_string();
        let prefix = normalize(
            &config
                .prefix
                .as_deref()
                .unwrap_or(table_location)
                .to_lowercase(),
        );

        tracing::debug!(
            data_location = %data_location,
            use_relative_path = config.use_relative_path,
            prefix = %prefix,
            "default location strategy constructed"
        );

        Self {
            data_location,
            use_relative_path: config.use_relative_path,
            prefix,
        }
    }

    pub fn data_location(&self) -> &str {
        &self.data_location
    }

    /// Lower-cased, normalized prefix used in relative mode
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl LocationStrategy for DefaultLocationStrategy {
    fn new_data_location(&self, partition_path: Option<&str>, filename: &str) -> Option<String> {
        let location = match partition_path {
            Some(partition) => format!("{}/{}/{}", self.data_location, partition, filename),
            None => format!("{}/{}", self.data_location, filename),
        };
        tracing::trace!(location = %location, "assigned data location");
        Some(location)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Default
    }
}

impl LocationRelativizer for DefaultLocationStrategy {
    fn is_relative(&self) -> bool {
        self.use_relative_path
    }

    // Matching is case-insensitive and the remainder is returned lower-cased.
    fn relative_path(&self, path: &str) -> Result<String> {
        if !self.use_relative_path {
            return Ok(path.to_string());
        }

        let lowered = normalize(path).to_lowercase();
        match lowered.strip_prefix(self.prefix.as_str()) {
            Some(relative) => Ok(relative.to_string()),
            None => Err(LocationError::InvalidPrefix {
                prefix: self.prefix.clone(),
                path: path.to_string(),
            }),
        }
    }

    fn absolute_path(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core_types::properties::{
        PREFIX, WRITE_DATA_LOCATION, WRITE_FOLDER_STORAGE_LOCATION,
        WRITE_METADATA_USE_RELATIVE_PATH,
    };

    fn relative_props() -> TableProperties {
        TableProperties::new().with(WRITE_METADATA_USE_RELATIVE_PATH, "true")
    }

    #[test]
    fn test_default_data_location() {
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &TableProperties::new());
        assert_eq!(strategy.data_location(), "s3://bucket/table/data");
        assert_eq!(
            strategy.new_data_location(None, "file.parquet").as_deref(),
            Some("s3://bucket/table/data/file.parquet")
        );
        assert_eq!(
            strategy.new_data_location(Some("a/b"), "file.parquet").as_deref(),
            Some("s3://bucket/table/data/a/b/file.parquet")
        );
    }

    #[test]
    fn test_data_location_overrides_strip_trailing_slash() {
        let props = TableProperties::new().with(WRITE_FOLDER_STORAGE_LOCATION, "s3://legacy/");
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &props);
        assert_eq!(strategy.data_location(), "s3://legacy");

        let props = props.with(WRITE_DATA_LOCATION, "s3://explicit/dir/");
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &props);
        assert_eq!(strategy.data_location(), "s3://explicit/dir");
    }

    #[test]
    fn test_relative_path_identity_when_disabled() {
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &TableProperties::new());
        assert!(!strategy.is_relative());
        assert_eq!(
            strategy.relative_path("S3://Other//Path/").unwrap(),
            "S3://Other//Path/"
        );
    }

    #[test]
    fn test_relative_path_strips_prefix() {
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &relative_props());
        assert!(strategy.is_relative());
        assert_eq!(strategy.prefix(), "s3://bucket/table");
        assert_eq!(
            strategy.relative_path("s3://bucket/table/data/x").unwrap(),
            "/data/x"
        );
    }

    #[test]
    fn test_relative_path_is_case_insensitive_and_lowercases() {
        let props = relative_props().with(PREFIX, "S3://Bucket/Table/");
        let strategy = DefaultLocationStrategy::new("s3://ignored", &props);
        assert_eq!(strategy.prefix(), "s3://bucket/table");
        assert_eq!(
            strategy.relative_path("S3://BUCKET/table//Data/File.parquet").unwrap(),
            "/data/file.parquet"
        );
    }

    #[test]
    fn test_relative_path_rejects_foreign_prefix() {
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &relative_props());
        let err = strategy.relative_path("s3://other/x").unwrap_err();
        assert_eq!(
            err,
            LocationError::InvalidPrefix {
                prefix: "s3://bucket/table".to_string(),
                path: "s3://other/x".to_string(),
            }
        );
    }

    #[test]
    fn test_absolute_path_is_identity() {
        let strategy = DefaultLocationStrategy::new("s3://bucket/table", &relative_props());
        assert_eq!(strategy.absolute_path("/data/x"), "/data/x");
    }
}

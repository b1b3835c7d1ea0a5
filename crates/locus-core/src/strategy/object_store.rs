use std::borrow::Cow;

use locus_core_types::TableProperties;

use super::{LocationRelativizer, LocationStrategy, StrategyKind};
use crate::config::LocationConfig;
use crate::errors::{LocationError, Result};
use crate::hashing::object_store_hash;
use crate::path_util::{name, parent, strip_trailing_slash};

/// Hash-prefixed flat layout for object stores
///
/// Files land at `{storage_location}/{hash}/{context}/{name}` where `hash` is
/// derived from the partition-qualified file name, spreading writes across
/// key prefixes. `context` (`{database}/{table}`) is only inserted when the
/// storage location is not nested under the table location.
#[derive(Debug, Clone)]
pub struct ObjectStoreLocationStrategy {
    storage_location: String,
    context: Option<String>,
}

impl ObjectStoreLocationStrategy {
    /// # Errors
    ///
    /// Returns `LocationError::InvariantViolation` if the context derived from
    /// `table_location` is empty or ends with a separator.
    pub fn new(table_location: &str, props: &TableProperties) -> Result<Self> {
        Self::from_config(table_location, &LocationConfig::from_properties(props))
    }

    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(table_location: &str, config: &LocationConfig) -> Result<Self> {
        let table_location = strip_trailing_slash(table_location);
        let storage_location =
            strip_trailing_slash(&config.object_store_location(table_location)).to_string();

        // Plain string prefix test: no context when storage lives under the table.
        let context = if storage_location.starts_with(table_location) {
            None
        } else {
            Some(path_context(table_location)?)
        };

        tracing::debug!(
            storage_location = %storage_location,
            context = ?context,
            "object store location strategy constructed"
        );

        Ok(Self {
            storage_location,
            context,
        })
    }

    pub fn storage_location(&self) -> &str {
        &self.storage_location
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// `{parent}/{table}` from the table location, or `{table}` without a named parent
fn path_context(table_location: &str) -> Result<String> {
    let table_name = name(table_location);
    let context = match parent(table_location)
        .map(|p| name(&p))
        .filter(|parent_name| !parent_name.is_empty())
    {
        Some(parent_name) => format!("{}/{}", parent_name, table_name),
        None => table_name,
    };

    if context.is_empty() || context.ends_with('/') {
        return Err(LocationError::InvariantViolation {
            reason: format!(
                "path context derived from table location {} must not be empty or end with a slash",
                table_location
            ),
        });
    }
    Ok(context)
}

impl LocationStrategy for ObjectStoreLocationStrategy {
    fn new_data_location(&self, partition_path: Option<&str>, filename: &str) -> Option<String> {
        let qualified: Cow<'_, str> = match partition_path {
            Some(partition) => Cow::Owned(format!("{}/{}", partition, filename)),
            None => Cow::Borrowed(filename),
        };

        let hash = object_store_hash(&qualified);
        let location = match &self.context {
            Some(context) => format!("{}/{}/{}/{}", self.storage_location, hash, context, qualified),
            None => format!("{}/{}/{}", self.storage_location, hash, qualified),
        };
        tracing::trace!(location = %location, "assigned data location");
        Some(location)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ObjectStore
    }
}

impl LocationRelativizer for ObjectStoreLocationStrategy {
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

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core_types::properties::{
        OBJECT_STORE_PATH, WRITE_DATA_LOCATION, WRITE_FOLDER_STORAGE_LOCATION,
    };

    #[test]
    fn test_no_context_under_table_location() {
        let strategy =
            ObjectStoreLocationStrategy::new("s3://bucket/db/table", &TableProperties::new())
                .unwrap();
        assert_eq!(strategy.storage_location(), "s3://bucket/db/table/data");
        assert_eq!(strategy.context(), None);
        assert_eq!(
            strategy.new_data_location(None, "data.parquet").as_deref(),
            Some("s3://bucket/db/table/data/kxgs8w/data.parquet")
        );
    }

    #[test]
    fn test_context_outside_table_location() {
        let props = TableProperties::new().with(OBJECT_STORE_PATH, "s3://objects/");
        let strategy = ObjectStoreLocationStrategy::new("s3://bucket/db/table", &props).unwrap();
        assert_eq!(strategy.storage_location(), "s3://objects");
        assert_eq!(strategy.context(), Some("db/table"));
        assert_eq!(
            strategy.new_data_location(None, "data.parquet").as_deref(),
            Some("s3://objects/kxgs8w/db/table/data.parquet")
        );
    }

    #[test]
    fn test_partition_is_hashed_with_filename() {
        let strategy =
            ObjectStoreLocationStrategy::new("s3://bucket/db/table", &TableProperties::new())
                .unwrap();
        assert_eq!(
            strategy
                .new_data_location(Some("id=1"), "test.parquet")
                .as_deref(),
            Some("s3://bucket/db/table/data/-KduVQ/id=1/test.parquet")
        );
        assert_eq!(
            strategy.new_data_location(Some("id=1"), "test.parquet"),
            strategy.new_data_location(None, "id=1/test.parquet")
        );
    }

    #[test]
    fn test_storage_location_precedence() {
        let props = TableProperties::new()
            .with(WRITE_FOLDER_STORAGE_LOCATION, "s3://legacy")
            .with(OBJECT_STORE_PATH, "s3://objects");
        let strategy = ObjectStoreLocationStrategy::new("s3://bucket/db/table", &props).unwrap();
        assert_eq!(strategy.storage_location(), "s3://objects");

        let props = props.with(WRITE_DATA_LOCATION, "s3://bucket/db/table/custom");
        let strategy = ObjectStoreLocationStrategy::new("s3://bucket/db/table", &props).unwrap();
        assert_eq!(strategy.storage_location(), "s3://bucket/db/table/custom");
        assert_eq!(strategy.context(), None);
    }

    #[test]
    fn test_context_without_named_parent() {
        let props = TableProperties::new().with(WRITE_DATA_LOCATION, "s3://objects");
        let strategy = ObjectStoreLocationStrategy::new("s3://bucket/table", &props).unwrap();
        assert_eq!(strategy.context(), Some("table"));
    }

    #[test]
    fn test_empty_context_is_invariant_violation() {
        let props = TableProperties::new().with(WRITE_DATA_LOCATION, "s3://objects");
        let err = ObjectStoreLocationStrategy::new("s3://bucket", &props).unwrap_err();
        assert!(matches!(err, LocationError::InvariantViolation { .. }));
    }

    #[test]
    fn test_paths_are_identity() {
        let strategy =
            ObjectStoreLocationStrategy::new("s3://bucket/db/table", &TableProperties::new())
                .unwrap();
        assert!(!strategy.is_relative());
        assert_eq!(strategy.relative_path("s3://x/Y").unwrap(), "s3://x/Y");
        assert_eq!(strategy.absolute_path("s3://x/Y"), "s3://x/Y");
    }
}

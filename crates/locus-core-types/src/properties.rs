//! Table properties consumed by location resolution
//!
//! Properties are a flat string-to-string map. A missing key always means
//! "use the default" and is never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Explicit location strategy implementation identifier
pub const WRITE_LOCATION_PROVIDER_IMPL: &str = "write.location-provider.impl";

/// Enables hash-prefixed object storage layout
pub const OBJECT_STORE_ENABLED: &str = "write.object-storage.enabled";
pub const OBJECT_STORE_ENABLED_DEFAULT: bool = false;

/// Object storage root override (legacy)
pub const OBJECT_STORE_PATH: &str = "write.object-storage.path";

/// Root for newly written data files
pub const WRITE_DATA_LOCATION: &str = "write.data.path";

/// Legacy data root, consulted after `write.data.path`
pub const WRITE_FOLDER_STORAGE_LOCATION: &str = "write.folder-storage.path";

/// Record metadata paths relative to `prefix`
pub const WRITE_METADATA_USE_RELATIVE_PATH: &str = "write.metadata.use.relative-path";
pub const WRITE_METADATA_USE_RELATIVE_PATH_DEFAULT: bool = false;

/// Prefix stripped from paths in relative mode (defaults to the table location)
pub const PREFIX: &str = "prefix";

/// Table property map
///
/// # Example
///
/// ```
/// use locus_core_types::properties::{TableProperties, OBJECT_STORE_ENABLED};
///
/// let props = TableProperties::new().with(OBJECT_STORE_ENABLED, "TRUE");
/// assert!(props.bool_or(OBJECT_STORE_ENABLED, false));
/// assert_eq!(props.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableProperties(HashMap<String, String>);

impl TableProperties {
    /// Create an empty property map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Add a property, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a property is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get a property value, falling back to `default`
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse a boolean property
    ///
    /// Only `"true"` (ASCII case-insensitive) is true; any other present value
    /// is false. An absent key yields `default`.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    /// Merge `other` into this map; entries in `other` win
    pub fn extend(&mut self, other: TableProperties) {
        self.0.extend(other.0);
    }
}

impl From<HashMap<String, String>> for TableProperties {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for TableProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_parsing_is_case_insensitive() {
        let props = TableProperties::new()
            .with(OBJECT_STORE_ENABLED, "True")
            .with(WRITE_METADATA_USE_RELATIVE_PATH, "yes");

        assert!(props.bool_or(OBJECT_STORE_ENABLED, false));
        assert!(!props.bool_or(WRITE_METADATA_USE_RELATIVE_PATH, true));
        assert!(props.bool_or(PREFIX, true));
    }

    #[test]
    fn test_get_or_default() {
        let props = TableProperties::new().with(WRITE_DATA_LOCATION, "s3://b/data");
        assert_eq!(props.get_or(WRITE_DATA_LOCATION, "x"), "s3://b/data");
        assert_eq!(props.get_or(OBJECT_STORE_PATH, "x"), "x");
    }

    #[test]
    fn test_from_iterator() {
        let props: TableProperties = [(PREFIX, "s3://bucket")].into_iter().collect();
        assert_eq!(props.len(), 1);
        assert!(props.contains_key(PREFIX));
    }

    #[test]
    fn test_extend_overrides() {
        let mut props = TableProperties::new().with(PREFIX, "a");
        props.extend(TableProperties::new().with(PREFIX, "b"));
        assert_eq!(props.get(PREFIX), Some("b"));
    }

    #[test]
    fn test_serialization_is_a_plain_object() {
        let props = TableProperties::new().with(OBJECT_STORE_ENABLED, "true");
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"write.object-storage.enabled":"true"}"#);

        let back: TableProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }
}

//! Location configuration schema
//!
//! The recognized subset of [`TableProperties`], parsed once. Strategies read
//! their fixed roots from here instead of looking keys up at call time.

use locus_core_types::properties::{
    TableProperties, OBJECT_STORE_ENABLED, OBJECT_STORE_ENABLED_DEFAULT, OBJECT_STORE_PATH,
    PREFIX, WRITE_DATA_LOCATION, WRITE_FOLDER_STORAGE_LOCATION, WRITE_LOCATION_PROVIDER_IMPL,
    WRITE_METADATA_USE_RELATIVE_PATH, WRITE_METADATA_USE_RELATIVE_PATH_DEFAULT,
};

/// Recognized location properties with defaults applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationConfig {
    /// Explicit implementation identifier (`write.location-provider.impl`)
    pub provider_impl: Option<String>,
    /// `write.object-storage.enabled`, default false
    pub object_store_enabled: bool,
    /// `write.object-storage.path`
    pub object_store_path: Option<String>,
    /// `write.data.path`
    pub write_data_path: Option<String>,
    /// `write.folder-storage.path`
    pub folder_storage_path: Option<String>,
    /// `write.metadata.use.relative-path`, default false
    pub use_relative_path: bool,
    /// `prefix`
    pub prefix: Option<String>,
}

impl LocationConfig {
    pub fn from_properties(props: &TableProperties) -> Self {
        let owned = |key: &str| props.get(key).map(str::to_string);
        Self {
            provider_impl: owned(WRITE_LOCATION_PROVIDER_IMPL),
            object_store_enabled: props.bool_or(OBJECT_STORE_ENABLED, OBJECT_STORE_ENABLED_DEFAULT),
            object_store_path: owned(OBJECT_STORE_PATH),
            write_data_path: owned(WRITE_DATA_LOCATION),
            folder_storage_path: owned(WRITE_FOLDER_STORAGE_LOCATION),
            use_relative_path: props.bool_or(
                WRITE_METADATA_USE_RELATIVE_PATH,
                WRITE_METADATA_USE_RELATIVE_PATH_DEFAULT,
            ),
            prefix: owned(PREFIX),
        }
    }

    /// Data root for hierarchical layout
    ///
    /// `write.data.path`, then `write.folder-storage.path`, then
    /// `{table_location}/data`.
    pub fn data_location(&self, table_location: &str) -> String {
        self.write_data_path
            .clone()
            .or_else(|| self.folder_storage_path.clone())
            .unwrap_or_else(|| format!("{}/data", table_location))
    }

    /// Data root for object storage layout
    ///
    /// Same as [`data_location`](Self::data_location) with
    /// `write.object-storage.path` consulted between the two overrides.
    pub fn object_store_location(&self, table_location: &str) -> String {
        self.write_data_path
            .clone()
            .or_else(|| self.object_store_path.clone())
            .or_else(|| self.folder_storage_path.clone())
            .unwrap_or_else(|| format!("{}/data", table_location))
    }
}

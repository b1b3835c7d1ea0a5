use std::sync::Arc;

use locus_core::{locations_for, LocationStrategy};
use locus_core_types::properties::{
    OBJECT_STORE_ENABLED, WRITE_DATA_LOCATION, WRITE_METADATA_USE_RELATIVE_PATH,
};
use locus_core_types::TableProperties;

#[allow(dead_code)]
pub const TABLE_LOCATION: &str = "s3://bucket/db/table";

/// Properties enabling object storage layout
#[allow(dead_code)]
pub fn object_store_props() -> TableProperties {
    TableProperties::new().with(OBJECT_STORE_ENABLED, "true")
}

/// Object storage layout rooted outside the table location
#[allow(dead_code)]
pub fn detached_object_store_props(root: &str) -> TableProperties {
    object_store_props().with(WRITE_DATA_LOCATION, root)
}

/// Properties enabling relative-path mode
#[allow(dead_code)]
pub fn relative_props() -> TableProperties {
    TableProperties::new().with(WRITE_METADATA_USE_RELATIVE_PATH, "true")
}

/// Resolve with the built-in registry, panicking on error
#[allow(dead_code)]
pub fn resolve(location: &str, props: &TableProperties) -> Arc<dyn LocationStrategy> {
    locations_for(location, props).expect("strategy should resolve")
}

//! Strategy selection from table properties
//!
//! First match wins:
//! 1. `write.location-provider.impl` names a registered implementation
//! 2. `write.object-storage.enabled` is true: object storage layout
//! 3. otherwise the hierarchical default layout

use std::sync::Arc;
use std::time::Instant;

use locus_core_types::TableProperties;

use crate::config::LocationConfig;
use crate::errors::{LocationError, Result};
use crate::path_util::strip_trailing_slash;
use crate::registry::StrategyRegistry;
use crate::strategy::{DefaultLocationStrategy, LocationStrategy, ObjectStoreLocationStrategy};
use crate::{log_op_end, log_op_error, log_op_start};

/// Resolves the location strategy for a table
#[derive(Debug, Clone)]
pub struct LocationResolver {
    registry: StrategyRegistry,
}

impl LocationResolver {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Build the strategy for the table at `input_location`
    ///
    /// Trailing slashes are stripped from `input_location`; no other
    /// normalization is applied.
    ///
    /// # Errors
    ///
    /// - `LocationError::InvalidInput` for an empty table location
    /// - `LocationError::Configuration` / `LocationError::TypeMismatch` when
    ///   the explicit implementation cannot be constructed
    /// - `LocationError::InvariantViolation` from object storage construction
    pub fn resolve(
        &self,
        input_location: &str,
        props: &TableProperties,
    ) -> Result<Arc<dyn LocationStrategy>> {
        let start = Instant::now();
        log_op_start!("resolve", table_location = input_location);

        let result = self.resolve_inner(input_location, props);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(strategy) => {
                log_op_end!(
                    "resolve",
                    duration_ms = duration_ms,
                    strategy = strategy.kind().as_str()
                );
            }
            Err(err) => {
                log_op_error!("resolve", err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    fn resolve_inner(
        &self,
        input_location: &str,
        props: &TableProperties,
    ) -> Result<Arc<dyn LocationStrategy>> {
        let location = strip_trailing_slash(input_location);
        if location.is_empty() {
            return Err(LocationError::InvalidInput {
                reason: format!("table location must not be empty, got {:?}", input_location),
            });
        }

        let config = LocationConfig::from_properties(props);
        if let Some(impl_name) = &config.provider_impl {
            return self.registry.construct(impl_name, location, props);
        }

        if config.object_store_enabled {
            Ok(Arc::new(ObjectStoreLocationStrategy::from_config(
                location, &config,
            )?))
        } else {
            Ok(Arc::new(DefaultLocationStrategy::from_config(
                location, &config,
            )))
        }
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(StrategyRegistry::with_builtins())
    }
}

/// Resolve with the built-in registry
///
/// # Errors
///
/// See [`LocationResolver::resolve`].
///
/// ```
/// use locus_core::locations_for;
/// use locus_core_types::TableProperties;
///
/// let strategy = locations_for("s3://bucket/table/", &TableProperties::new()).unwrap();
/// assert_eq!(
///     strategy.new_data_location(None, "f.parquet").as_deref(),
///     Some("s3://bucket/table/data/f.parquet")
/// );
/// ```
pub fn locations_for(
    input_location: &str,
    props: &TableProperties,
) -> Result<Arc<dyn LocationStrategy>> {
    LocationResolver::default().resolve(input_location, props)
}

//! Named strategy implementations
//!
//! Maps an implementation identifier (the value of
//! `write.location-provider.impl`) to constructors. An identifier may have a
//! two-argument constructor taking the table location and its properties, a
//! zero-argument constructor, or both; the two-argument form is preferred.
//!
//! Constructors produce type-erased instances. Construction checks that the
//! instance is an `Arc<dyn LocationStrategy>`, so identifiers registered for
//! another kind of plugin fail with `LocationError::TypeMismatch`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use locus_core_types::TableProperties;

use crate::errors::{LocationError, Result};
use crate::strategy::{
    DefaultLocationStrategy, LocationStrategy, NullLocationStrategy, ObjectStoreLocationStrategy,
};

/// Identifier of the built-in hierarchical strategy
pub const DEFAULT_IMPL: &str = "default";
/// Identifier of the built-in object storage strategy
pub const OBJECT_STORAGE_IMPL: &str = "object-storage";
/// Identifier of the built-in strategy that assigns no locations
pub const NO_ACTION_IMPL: &str = "no-action";

/// Type-erased constructed implementation
pub type Instance = Box<dyn Any + Send + Sync>;

type WithArgsCtor = Arc<dyn Fn(&str, &TableProperties) -> Result<Instance> + Send + Sync>;
type NoArgsCtor = Arc<dyn Fn() -> Result<Instance> + Send + Sync>;

#[derive(Clone, Default)]
struct Constructors {
    with_args: Option<WithArgsCtor>,
    no_args: Option<NoArgsCtor>,
}

/// Box a strategy as an [`Instance`] that passes the construction type check
pub fn strategy_instance(strategy: Arc<dyn LocationStrategy>) -> Instance {
    Box::new(strategy)
}

/// Registry of named strategy constructors
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    entries: HashMap<String, Constructors>,
}

impl StrategyRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in strategies under
    /// [`DEFAULT_IMPL`], [`OBJECT_STORAGE_IMPL`] and [`NO_ACTION_IMPL`]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_strategy(DEFAULT_IMPL, |location, props| {
            Ok(DefaultLocationStrategy::new(location, props))
        });
        registry.register_strategy(OBJECT_STORAGE_IMPL, ObjectStoreLocationStrategy::new);
        registry.register_default_strategy::<NullLocationStrategy>(NO_ACTION_IMPL);
        registry
    }

    /// Register a raw two-argument constructor
    pub fn register_with_args<F>(&mut self, impl_name: impl Into<String>, ctor: F)
    where
        F: Fn(&str, &TableProperties) -> Result<Instance> + Send + Sync + 'static,
    {
        let impl_name = impl_name.into();
        tracing::debug!(impl_name = %impl_name, "registered two-arg constructor");
        self.entries.entry(impl_name).or_default().with_args = Some(Arc::new(ctor));
    }

    /// Register a raw zero-argument constructor
    pub fn register_no_args<F>(&mut self, impl_name: impl Into<String>, ctor: F)
    where
        F: Fn() -> Result<Instance> + Send + Sync + 'static,
    {
        let impl_name = impl_name.into();
        tracing::debug!(impl_name = %impl_name, "registered no-arg constructor");
        self.entries.entry(impl_name).or_default().no_args = Some(Arc::new(ctor));
    }

    /// Register a strategy built from the table location and properties
    pub fn register_strategy<S, F>(&mut self, impl_name: impl Into<String>, ctor: F)
    where
        S: LocationStrategy + 'static,
        F: Fn(&str, &TableProperties) -> Result<S> + Send + Sync + 'static,
    {
        self.register_with_args(impl_name, move |location, props| {
            let strategy: Arc<dyn LocationStrategy> = Arc::new(ctor(location, props)?);
            Ok(strategy_instance(strategy))
        });
    }

    /// Register a strategy built with `Default::default()`
    pub fn register_default_strategy<S>(&mut self, impl_name: impl Into<String>)
    where
        S: LocationStrategy + Default + 'static,
    {
        self.register_no_args(impl_name, || {
            let strategy: Arc<dyn LocationStrategy> = Arc::new(S::default());
            Ok(strategy_instance(strategy))
        });
    }

    pub fn contains(&self, impl_name: &str) -> bool {
        self.entries.contains_key(impl_name)
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the implementation registered as `impl_name`
    ///
    /// # Errors
    ///
    /// - `LocationError::Configuration` if nothing usable is registered
    /// - `LocationError::TypeMismatch` if the instance is not a strategy
    /// - any error returned by the constructor itself
    pub fn construct(
        &self,
        impl_name: &str,
        location: &str,
        props: &TableProperties,
    ) -> Result<Arc<dyn LocationStrategy>> {
        let ctors = self
            .entries
            .get(impl_name)
            .ok_or_else(|| LocationError::Configuration {
                impl_name: impl_name.to_string(),
                reason: "no implementation is registered under this name".to_string(),
            })?;

        let instance = match (&ctors.with_args, &ctors.no_args) {
            (Some(ctor), _) => ctor(location, props)?,
            (None, Some(ctor)) => ctor()?,
            (None, None) => {
                return Err(LocationError::Configuration {
                    impl_name: impl_name.to_string(),
                    reason: "no compatible constructor".to_string(),
                })
            }
        };

        instance
            .downcast::<Arc<dyn LocationStrategy>>()
            .map(|strategy| *strategy)
            .map_err(|_| LocationError::TypeMismatch {
                impl_name: impl_name.to_string(),
            })
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_builtins_registered() {
        let registry = StrategyRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![DEFAULT_IMPL, NO_ACTION_IMPL, OBJECT_STORAGE_IMPL]
        );
    }

    #[test]
    fn test_construct_builtin() {
        let registry = StrategyRegistry::with_builtins();
        let strategy = registry
            .construct(OBJECT_STORAGE_IMPL, "s3://b/db/t", &TableProperties::new())
            .unwrap();
        assert_eq!(strategy.kind(), StrategyKind::ObjectStore);

        let strategy = registry
            .construct(NO_ACTION_IMPL, "s3://b/db/t", &TableProperties::new())
            .unwrap();
        assert_eq!(strategy.kind(), StrategyKind::Null);
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let registry = StrategyRegistry::new();
        let err = registry
            .construct("com.example.Missing", "s3://b/t", &TableProperties::new())
            .unwrap_err();
        assert!(matches!(err, LocationError::Configuration { ref impl_name, .. } if impl_name == "com.example.Missing"));
    }

    #[test]
    fn test_non_strategy_instance_is_type_mismatch() {
        let mut registry = StrategyRegistry::new();
        registry.register_no_args("not-a-strategy", || Ok(Box::new(42u32) as Instance));
        let err = registry
            .construct("not-a-strategy", "s3://b/t", &TableProperties::new())
            .unwrap_err();
        assert_eq!(
            err,
            LocationError::TypeMismatch {
                impl_name: "not-a-strategy".to_string()
            }
        );
    }

    #[test]
    fn test_two_arg_constructor_preferred() {
        let mut registry = StrategyRegistry::new();
        registry.register_default_strategy::<NullLocationStrategy>("both");
        registry.register_strategy("both", |location, props| {
            Ok(DefaultLocationStrategy::new(location, props))
        });
        let strategy = registry
            .construct("both", "s3://b/t", &TableProperties::new())
            .unwrap();
        assert_eq!(strategy.kind(), StrategyKind::Default);
    }
}

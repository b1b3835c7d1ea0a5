//! Locus Core - data file location assignment for tables
//!
//! This crate computes where every new data file of a table is written and
//! translates paths between absolute and table-relative forms:
//! - Location strategies: hierarchical default, hash-prefixed object storage,
//!   and a no-op strategy
//! - A registry of named strategy constructors for custom implementations
//! - A resolver selecting the strategy from table properties
//! - MurmurHash3-based prefixes that spread writes across object store keys
//!
//! No I/O is performed; every operation is a pure computation over strings.

pub mod config;
pub mod errors;
pub mod hashing;
pub mod logging_facility;
pub mod path_util;
pub mod registry;
pub mod resolver;
pub mod strategy;

#[doc(hidden)]
pub use locus_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use config::LocationConfig;
pub use errors::{ExError, ExErrorKind, LocationError, Result};
pub use registry::StrategyRegistry;
pub use resolver::{locations_for, LocationResolver};
pub use strategy::{
    DefaultLocationStrategy, LocationRelativizer, LocationStrategy, NoopRelativizer,
    NullLocationStrategy, ObjectStoreLocationStrategy, StrategyKind,
};

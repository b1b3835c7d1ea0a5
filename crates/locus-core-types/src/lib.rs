//! Core types shared across the locus crates
//!
//! This crate provides foundational types used by the location core,
//! its logging facility and the CLI:
//!
//! - **Table properties**: TableProperties and the recognized property keys
//! - **Schema constants**: Canonical field keys and event names

pub mod properties;
pub mod schema;

pub use properties::TableProperties;

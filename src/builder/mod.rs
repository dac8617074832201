//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder for stores and a factory that
//! provisions them as a process-wide singleton or per-session instances.

pub mod error;
pub mod factory;
pub mod store;

pub use error::BuildError;
pub use factory::StoreFactory;
pub use store::StoreBuilder;

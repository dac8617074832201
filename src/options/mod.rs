//! Store configuration.
//!
//! [`StoreOptions`] is the runtime bundle handed to a store, including the
//! location closures. [`StoreSettings`] is its plain-data subset, loadable
//! from configuration files. [`OptionsBuilder`] assembles either.

mod builder;
mod settings;
mod store_options;

pub use builder::OptionsBuilder;
pub use settings::{SettingsError, StoreSettings, DEFAULT_MAX_HISTORICAL_RECORDS};
pub use store_options::{LocationActionCreator, LocationExtractor, StoreOptions};

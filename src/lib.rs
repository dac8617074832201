//! Rewind Store: an observable state container with time travel
//!
//! A store holds the state of an interactive application and changes it
//! only by running dispatched actions through a pure reducer. Every commit
//! is recorded in a bounded history that can be rewound and replayed, and a
//! slice of state can be kept in step with an external navigation location.
//!
//! # Core Concepts
//!
//! - **Store**: Single-writer container; see [`Store`]
//! - **History**: Bounded past/future stacks of [`HistoryEntry`] snapshots
//! - **Options**: History depth and location-sync behavior; see [`StoreOptions`]
//! - **Location sync**: Two-way feedback with a [`Navigator`], guarded
//!   against echo loops
//!
//! # Example
//!
//! ```rust
//! use rewind_store::{HistoryError, StoreBuilder};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! #[derive(Debug)]
//! enum Action {
//!     Increment,
//! }
//!
//! let store = StoreBuilder::new()
//!     .initial(Counter { count: 0 })
//!     .reducer(|state: &Counter, action: &Action| match action {
//!         Action::Increment => Counter { count: state.count + 1 },
//!     })
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..3 {
//!     store.dispatch(Action::Increment);
//! }
//! assert_eq!(store.state().count, 3);
//!
//! store.rewind(1).unwrap();
//! assert_eq!(store.state().count, 2);
//! assert!(matches!(store.rewind(2), Err(HistoryError::OutOfRange { .. })));
//!
//! store.fast_forward(1).unwrap();
//! assert_eq!(store.state().count, 3);
//! ```

pub mod binding;
pub mod builder;
pub mod core;
pub mod location;
pub mod options;
pub mod store;
pub mod subscription;

// Re-export commonly used types
pub use binding::Connection;
pub use builder::{BuildError, StoreBuilder, StoreFactory};
pub use core::{ChangeLocationAction, HistoryEntry, HistoryError, Reducer};
pub use location::{MemoryNavigator, Navigator};
pub use options::{OptionsBuilder, StoreOptions, StoreSettings};
pub use store::Store;
pub use subscription::SubscriptionId;

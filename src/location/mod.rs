//! Navigation capability.
//!
//! The store synchronizes a slice of its state with an external
//! [`Navigator`]. [`MemoryNavigator`] is a self-contained implementation
//! for headless applications and tests.

mod memory;
mod navigator;

pub use memory::MemoryNavigator;
pub use navigator::{LocationListener, Navigator};

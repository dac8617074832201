//! Core store types.
//!
//! This module holds the lock-free building blocks of the store:
//! - [`HistoryEntry`] snapshots and the bounded [`History`] cursor
//! - The [`Reducer`] function type
//! - The built-in [`ChangeLocationAction`]
//!
//! Nothing here synchronizes; the [`Store`](crate::store::Store) provides
//! the critical section around these values.

mod action;
mod error;
mod history;
mod reducer;

pub use action::ChangeLocationAction;
pub use error::HistoryError;
pub use history::{History, HistoryEntry};
pub use reducer::{reducer, Reducer};

//! The observable store.
//!
//! A [`Store`] owns the current state, the reducer, the bounded history and
//! the location-sync subscriptions. One lock guards state, history and the
//! location cache together:
//!
//! - [`Store::dispatch`] reduces, commits and clears the redo future
//! - [`Store::rewind`] and [`Store::fast_forward`] move through history
//!   without running the reducer
//! - [`Store::init_location_sync`] links the store to a
//!   [`Navigator`](crate::location::Navigator)
//!
//! Listeners run after the lock is released, so they may call back into the
//! store.

mod handle;
mod sync;

pub use handle::Store;

//! In-memory navigator.

use super::navigator::{LocationListener, Navigator};
use crate::subscription::{Listeners, SubscriptionId};
use parking_lot::Mutex;
use std::fmt;

/// A thread-safe [`Navigator`] holding its location in memory.
///
/// [`navigate_to`](Navigator::navigate_to) behaves like a router: it records
/// the request, changes the location and notifies listeners synchronously.
/// [`set_location`](MemoryNavigator::set_location) simulates a change made
/// outside the application, such as the user editing the address bar.
///
/// # Example
///
/// ```rust
/// use rewind_store::location::{MemoryNavigator, Navigator};
///
/// let navigator = MemoryNavigator::new("/");
/// navigator.navigate_to("/inbox");
///
/// assert_eq!(navigator.current_location(), "/inbox");
/// assert_eq!(navigator.navigations(), vec!["/inbox".to_string()]);
/// ```
pub struct MemoryNavigator {
    location: Mutex<String>,
    navigations: Mutex<Vec<String>>,
    listeners: Listeners<dyn Fn(&str) + Send + Sync>,
}

impl MemoryNavigator {
    /// Create a navigator starting at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            location: Mutex::new(initial.into()),
            navigations: Mutex::new(Vec::new()),
            listeners: Listeners::new(),
        }
    }

    /// Change the location from outside the application and notify listeners.
    pub fn set_location(&self, location: &str) {
        self.change(location);
    }

    /// Every location passed to `navigate_to`, in call order.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn change(&self, location: &str) {
        *self.location.lock() = location.to_string();
        for listener in self.listeners.snapshot() {
            listener(location);
        }
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> String {
        self.location.lock().clone()
    }

    fn navigate_to(&self, location: &str) {
        self.navigations.lock().push(location.to_string());
        self.change(location);
    }

    fn subscribe(&self, listener: LocationListener) -> SubscriptionId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.remove(id);
    }
}

impl fmt::Debug for MemoryNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNavigator")
            .field("location", &*self.location.lock())
            .field("navigations", &self.navigations.lock().len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

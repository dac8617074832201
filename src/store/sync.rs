//! Location synchronization between a store and a [`Navigator`].
//!
//! Two one-way feeds share a single `current_location` cache held under the
//! store lock:
//!
//! - **inbound**: a reported location that differs from the cache updates it
//!   and dispatches the configured location action.
//! - **outbound**: after every state change, the location derived from state
//!   is compared with the cache; only a difference triggers `navigate_to`.
//!   Outbound passes run one at a time, so navigations reach the navigator in
//!   commit order.
//!
//! A navigation echoed back by the navigator matches the cache and stops there.

use super::handle::{Store, StoreInner};
use crate::location::Navigator;
use crate::subscription::SubscriptionId;
use std::fmt;
use std::sync::{Arc, Weak};

/// The subscriptions a store holds while synchronized.
pub(crate) struct LocationLink {
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) location_subscription: SubscriptionId,
    pub(crate) state_subscription: SubscriptionId,
}

impl LocationLink {
    pub(crate) fn detach_navigator(&self) {
        self.navigator.unsubscribe(self.location_subscription);
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    /// Start synchronizing with `navigator`.
    ///
    /// Does nothing when synchronization is suppressed, the store is closed,
    /// or another navigator is already attached. Otherwise registers both
    /// feeds and immediately runs one inbound pass with the navigator's
    /// current location.
    pub fn init_location_sync(&self, navigator: Arc<dyn Navigator>) {
        if self.inner.options.suppress_location_sync {
            tracing::debug!("location sync suppressed");
            return;
        }
        if self.is_location_synced() || self.is_closed() {
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let location_subscription = navigator.subscribe(Arc::new({
            let weak = Weak::clone(&weak);
            move |location: &str| {
                if let Some(inner) = weak.upgrade() {
                    Store { inner }.sync_from_navigator(location);
                }
            }
        }));
        let state_subscription = self.inner.listeners.add(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Store { inner }.sync_to_navigator();
            }
        }));
        let link = LocationLink {
            navigator: Arc::clone(&navigator),
            location_subscription,
            state_subscription,
        };

        let rejected = {
            let mut core = self.inner.core.lock();
            if core.sync.is_some() || core.closed {
                Some(link)
            } else {
                core.sync = Some(link);
                None
            }
        };
        if let Some(link) = rejected {
            link.detach_navigator();
            self.inner.listeners.remove(link.state_subscription);
            return;
        }

        tracing::debug!("location sync initialized");
        self.sync_from_navigator(&navigator.current_location());
    }

    /// Whether a navigator is currently attached.
    pub fn is_location_synced(&self) -> bool {
        self.inner.core.lock().sync.is_some()
    }

    /// The last location reported by or sent to the navigator.
    pub fn current_location(&self) -> Option<String> {
        self.inner.core.lock().current_location.clone()
    }

    pub(crate) fn sync_from_navigator(&self, location: &str) {
        let changed = {
            let mut core = self.inner.core.lock();
            if core.sync.is_none() || core.current_location.as_deref() == Some(location) {
                false
            } else {
                core.current_location = Some(location.to_string());
                true
            }
        };
        if !changed {
            tracing::trace!(location, "inbound location unchanged");
            return;
        }

        match &self.inner.options.location_action_creator {
            Some(create) => {
                tracing::debug!(location, "location changed, dispatching location action");
                self.dispatch(create(location));
            }
            None => tracing::debug!(location, "location changed, no location action configured"),
        }
    }

    pub(crate) fn sync_to_navigator(&self) {
        let Some(get_location) = &self.inner.options.get_location else {
            return;
        };
        let _outbound = self.inner.outbound.lock();

        // Derive and compare-and-set against one state under one lock.
        let (navigator, target) = {
            let mut core = self.inner.core.lock();
            let Some(link) = core.sync.as_ref() else {
                return;
            };
            let navigator = Arc::clone(&link.navigator);
            let Some(target) = get_location(core.state.as_ref()) else {
                return;
            };
            if core.current_location.as_deref() == Some(target.as_str()) {
                return;
            }
            core.current_location = Some(target.clone());
            (navigator, target)
        };

        tracing::debug!(location = %target, "state location changed, navigating");
        navigator.navigate_to(&target);
    }
}

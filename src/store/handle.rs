//! The store handle: dispatch, time travel and change notification.

use super::sync::LocationLink;
use crate::core::{History, HistoryEntry, HistoryError, Reducer};
use crate::options::StoreOptions;
use crate::subscription::{Listeners, SubscriptionId};
use parking_lot::{Mutex, ReentrantMutex};
use std::fmt;
use std::sync::Arc;

/// State-changed callback. Carries no payload: listeners re-read
/// [`Store::state`].
pub(crate) type ChangeListener = dyn Fn() + Send + Sync;

/// Everything guarded by the store lock, mutated as one unit.
pub(crate) struct StoreCore<S, A> {
    pub(crate) state: Arc<S>,
    pub(crate) history: History<S, A>,
    pub(crate) current_location: Option<String>,
    pub(crate) sync: Option<LocationLink>,
    pub(crate) closed: bool,
}

pub(crate) struct StoreInner<S, A> {
    pub(crate) core: Mutex<StoreCore<S, A>>,
    pub(crate) reducer: Reducer<S, A>,
    pub(crate) options: StoreOptions<S, A>,
    pub(crate) listeners: Listeners<ChangeListener>,
    /// Serializes outbound passes, including their `navigate_to` call.
    /// Reentrant: `navigate_to` may dispatch on the same thread.
    pub(crate) outbound: ReentrantMutex<()>,
}

impl<S, A> Drop for StoreInner<S, A> {
    fn drop(&mut self) {
        if let Some(link) = self.core.get_mut().sync.take() {
            link.detach_navigator();
        }
    }
}

/// A single-writer observable state container with bounded time travel.
///
/// `Store` is a cheap handle: clones share the same state, history and
/// listeners. All writes go through one lock; listeners are called after
/// it is released, synchronously and in subscription order.
///
/// # Example
///
/// ```rust
/// use rewind_store::options::StoreOptions;
/// use rewind_store::store::Store;
///
/// #[derive(Debug)]
/// enum Counter {
///     Increment,
/// }
///
/// let store = Store::new(0u32, |count: &u32, _: &Counter| count + 1, StoreOptions::default());
///
/// for _ in 0..3 {
///     store.dispatch(Counter::Increment);
/// }
/// assert_eq!(*store.state(), 3);
///
/// store.rewind(1).unwrap();
/// assert_eq!(*store.state(), 2);
///
/// store.fast_forward(1).unwrap();
/// assert_eq!(*store.state(), 3);
/// ```
pub struct Store<S, A> {
    pub(crate) inner: Arc<StoreInner<S, A>>,
}

// Manual Clone: shares the same inner store.
impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    /// Create a store from an initial state, a reducer and options.
    ///
    /// History is seeded with the initial state, subject to the depth cap.
    pub fn new<F>(initial: S, reducer: F, options: StoreOptions<S, A>) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Self::from_reducer(initial, Arc::new(reducer), options)
    }

    /// Create a store with default options.
    pub fn with_defaults<F>(initial: S, reducer: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Self::new(initial, reducer, StoreOptions::default())
    }

    /// Create a store from an already shared [`Reducer`].
    pub fn from_reducer(initial: S, reducer: Reducer<S, A>, options: StoreOptions<S, A>) -> Self {
        let state = Arc::new(initial);
        let mut history = History::new(options.max_historical_records);
        history.commit(HistoryEntry::from_shared(Arc::clone(&state), None));

        tracing::debug!(
            max_historical_records = ?options.max_historical_records,
            suppress_location_sync = options.suppress_location_sync,
            "store created"
        );

        Self {
            inner: Arc::new(StoreInner {
                core: Mutex::new(StoreCore {
                    state,
                    history,
                    current_location: None,
                    sync: None,
                    closed: false,
                }),
                reducer,
                options,
                listeners: Listeners::new(),
                outbound: ReentrantMutex::new(()),
            }),
        }
    }

    /// The current state.
    ///
    /// Listeners should call this on every notification rather than assume
    /// they observe the state of the dispatch that notified them.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.inner.core.lock().state)
    }

    /// Apply `action` through the reducer and commit the result.
    ///
    /// The reducer call, state assignment and history append happen in one
    /// critical section, which also clears any reverted future. Listeners
    /// are notified after the lock is released.
    ///
    /// If the reducer panics, the panic reaches the caller, the state is
    /// unchanged and nobody is notified.
    pub fn dispatch(&self, action: A) {
        tracing::debug!(action = ?action, "dispatching action");

        let past = {
            let mut core = self.inner.core.lock();
            let next = Arc::new((self.inner.reducer)(core.state.as_ref(), &action));
            core.state = Arc::clone(&next);
            core.history
                .commit(HistoryEntry::from_shared(next, Some(Arc::new(action))));
            core.history.past_len()
        };

        tracing::trace!(past, "action committed");
        self.notify();
    }

    /// Restore the state recorded `steps` commits before the current one.
    ///
    /// Requires at least `steps + 2` entries in the past. The reducer is not
    /// invoked. `rewind(0)` re-asserts the current state and still notifies.
    pub fn rewind(&self, steps: usize) -> Result<(), HistoryError> {
        let result = {
            let mut core = self.inner.core.lock();
            match core.history.rewind(steps) {
                Ok(state) => {
                    core.state = state;
                    Ok((core.history.past_len(), core.history.future_len()))
                }
                Err(err) => Err(err),
            }
        };

        match result {
            Ok((past, future)) => {
                tracing::debug!(steps, past, future, "rewound history");
                self.notify();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(steps, error = %err, "rewind rejected");
                Err(err)
            }
        }
    }

    /// Replay `steps` reverted entries.
    ///
    /// Requires at least `steps` entries in the future. The reducer is not
    /// invoked. `fast_forward(0)` re-asserts the current state and still
    /// notifies.
    pub fn fast_forward(&self, steps: usize) -> Result<(), HistoryError> {
        let result = {
            let mut core = self.inner.core.lock();
            match core.history.fast_forward(steps) {
                Ok(state) => {
                    core.state = state;
                    Ok((core.history.past_len(), core.history.future_len()))
                }
                Err(err) => Err(err),
            }
        };

        match result {
            Ok((past, future)) => {
                tracing::debug!(steps, past, future, "fast-forwarded history");
                self.notify();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(steps, error = %err, "fast-forward rejected");
                Err(err)
            }
        }
    }

    /// Register a state-changed listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.listeners.add(Arc::new(listener));
        tracing::debug!(subscription = %id, "listener subscribed");
        id
    }

    /// Remove a state-changed listener. Returns `false` if it was not
    /// registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.inner.listeners.remove(id);
        tracing::debug!(subscription = %id, removed, "listener unsubscribed");
        removed
    }

    /// Tear down location synchronization.
    ///
    /// Removes exactly the navigator listener and the state-changed listener
    /// the store registered for itself. Calling it again does nothing.
    /// Dispatch and time travel keep working afterwards.
    pub fn close(&self) {
        let link = {
            let mut core = self.inner.core.lock();
            if core.closed {
                return;
            }
            core.closed = true;
            core.sync.take()
        };

        if let Some(link) = link {
            link.detach_navigator();
            self.inner.listeners.remove(link.state_subscription);
        }
        tracing::debug!("store closed");
    }

    /// Whether [`close`](Store::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.core.lock().closed
    }

    /// Number of entries that can be rewound through, including the current one.
    pub fn past_len(&self) -> usize {
        self.inner.core.lock().history.past_len()
    }

    /// Number of reverted entries available to fast-forward.
    pub fn future_len(&self) -> usize {
        self.inner.core.lock().history.future_len()
    }

    /// Snapshot of the past, oldest first. The last entry is current.
    pub fn history(&self) -> Vec<HistoryEntry<S, A>> {
        self.inner.core.lock().history.past().cloned().collect()
    }

    /// Snapshot of reverted entries, next to replay first.
    pub fn future(&self) -> Vec<HistoryEntry<S, A>> {
        self.inner
            .core
            .lock()
            .history
            .future()
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    /// The options this store was created with.
    pub fn options(&self) -> &StoreOptions<S, A> {
        &self.inner.options
    }

    /// Number of state-changed listeners, including the store's own sync listener.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub(crate) fn notify(&self) {
        for listener in self.inner.listeners.snapshot() {
            listener();
        }
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.core.lock();
        f.debug_struct("Store")
            .field("past", &core.history.past_len())
            .field("future", &core.history.future_len())
            .field("current_location", &core.current_location)
            .field("synced", &core.sync.is_some())
            .field("closed", &core.closed)
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

//! Binding between a store and a UI component.
//!
//! A [`Connection`] is what a component holds while it is mounted: it pulls
//! state, re-renders on change and forwards dispatches. Detaching removes
//! exactly the listener the connection added.

use crate::location::Navigator;
use crate::store::Store;
use crate::subscription::SubscriptionId;
use std::fmt;
use std::sync::Arc;

/// A component's attachment to a [`Store`].
///
/// # Example
///
/// ```rust
/// use rewind_store::binding::Connection;
/// use rewind_store::store::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Tick;
///
/// let store = Store::with_defaults(0u32, |n: &u32, _: &Tick| n + 1);
/// let renders = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&renders);
///
/// let mut connection = Connection::attach(&store, None, move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// connection.dispatch(Tick);
/// assert_eq!(*connection.state(), 1);
/// assert_eq!(renders.load(Ordering::SeqCst), 1);
///
/// connection.detach();
/// store.dispatch(Tick);
/// assert_eq!(renders.load(Ordering::SeqCst), 1);
/// ```
pub struct Connection<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    store: Store<S, A>,
    subscription: Option<SubscriptionId>,
}

impl<S, A> Connection<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    /// Attach to `store`.
    ///
    /// When a navigator is given, location synchronization is initialized
    /// first (a no-op if the store is already synchronized). `on_change` is
    /// then called after every state change until the connection detaches.
    pub fn attach<F>(store: &Store<S, A>, navigator: Option<Arc<dyn Navigator>>, on_change: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        if let Some(navigator) = navigator {
            store.init_location_sync(navigator);
        }
        let subscription = store.subscribe(on_change);
        tracing::debug!(subscription = %subscription, "connection attached");

        Self {
            store: store.clone(),
            subscription: Some(subscription),
        }
    }

    /// The store's current state.
    pub fn state(&self) -> Arc<S> {
        self.store.state()
    }

    /// Dispatch through the connected store.
    pub fn dispatch(&self, action: A) {
        self.store.dispatch(action);
    }

    /// The store this connection dispatches to.
    pub fn store(&self) -> &Store<S, A> {
        &self.store
    }

    /// Whether the change listener is still registered.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop receiving change notifications. Calling it again does nothing.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(subscription);
            tracing::debug!(subscription = %subscription, "connection detached");
        }
    }
}

impl<S, A> Drop for Connection<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.detach();
    }
}

impl<S, A> fmt::Debug for Connection<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("subscription", &self.subscription)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChangeLocationAction;
    use crate::location::MemoryNavigator;
    use crate::options::OptionsBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    enum PageAction {
        Open(String),
    }

    impl From<ChangeLocationAction> for PageAction {
        fn from(action: ChangeLocationAction) -> Self {
            PageAction::Open(action.location)
        }
    }

    fn page_store() -> Store<String, PageAction> {
        let options = OptionsBuilder::new()
            .default_location_actions()
            .get_location(|page: &String| Some(page.clone()))
            .build();
        Store::new(
            String::from("/"),
            |_: &String, action: &PageAction| match action {
                PageAction::Open(page) => page.clone(),
            },
            options,
        )
    }

    fn render_counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let renders = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&renders);
        (renders, move || {
            sink.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn attach_initializes_location_sync() {
        let navigator = Arc::new(MemoryNavigator::new("/welcome"));
        let store = page_store();
        let (_, on_change) = render_counter();

        let connection = Connection::attach(&store, Some(navigator.clone()), on_change);

        assert!(connection.is_attached());
        assert!(store.is_location_synced());
        assert_eq!(*connection.state(), "/welcome");
    }

    #[test]
    fn dispatch_passes_through_and_renders() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let store = page_store();
        let (renders, on_change) = render_counter();
        let connection = Connection::attach(&store, Some(navigator.clone()), on_change);

        connection.dispatch(PageAction::Open("/about".to_string()));

        assert_eq!(*store.state(), "/about");
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.navigations(), vec!["/about".to_string()]);
    }

    #[test]
    fn detach_is_idempotent() {
        let store = page_store();
        let (renders, on_change) = render_counter();
        let mut connection = Connection::attach(&store, None, on_change);
        let before = store.subscriber_count();

        connection.detach();
        connection.detach();

        assert!(!connection.is_attached());
        assert_eq!(store.subscriber_count(), before - 1);
        store.dispatch(PageAction::Open("/x".to_string()));
        assert_eq!(renders.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drop_detaches() {
        let store = page_store();
        {
            let (_, on_change) = render_counter();
            let _connection = Connection::attach(&store, None, on_change);
            assert_eq!(store.subscriber_count(), 1);
        }
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn detach_leaves_store_sync_running() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let store = page_store();
        let (_, on_change) = render_counter();
        let mut connection = Connection::attach(&store, Some(navigator.clone()), on_change);

        connection.detach();
        navigator.set_location("/later");

        assert_eq!(*store.state(), "/later");
        assert!(store.is_location_synced());
    }

    #[test]
    fn two_connections_share_one_sync() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let store = page_store();
        let (first_renders, first) = render_counter();
        let (second_renders, second) = render_counter();

        let _a = Connection::attach(&store, Some(navigator.clone()), first);
        let _b = Connection::attach(&store, Some(navigator.clone()), second);
        navigator.set_location("/shared");

        assert_eq!(navigator.listener_count(), 1);
        assert_eq!(first_renders.load(Ordering::SeqCst), 1);
        assert_eq!(second_renders.load(Ordering::SeqCst), 1);
    }
}

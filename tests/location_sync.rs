//! Location synchronization driven through the public API.

use rewind_store::location::{LocationListener, MemoryNavigator, Navigator};
use rewind_store::{ChangeLocationAction, Connection, OptionsBuilder, Store, SubscriptionId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
struct AppState {
    path: String,
    query: Option<String>,
}

#[derive(Debug)]
enum AppAction {
    LocationChanged(String),
    Search(String),
    ClearSearch,
}

impl From<ChangeLocationAction> for AppAction {
    fn from(action: ChangeLocationAction) -> Self {
        AppAction::LocationChanged(action.location)
    }
}

fn reduce(state: &AppState, action: &AppAction) -> AppState {
    match action {
        AppAction::LocationChanged(location) => {
            let (path, query) = match location.split_once("?q=") {
                Some((path, query)) => (path.to_string(), Some(query.to_string())),
                None => (location.clone(), None),
            };
            AppState { path, query }
        }
        AppAction::Search(query) => AppState {
            path: "/search".to_string(),
            query: Some(query.clone()),
        },
        AppAction::ClearSearch => AppState {
            path: "/".to_string(),
            query: None,
        },
    }
}

fn location_of(state: &AppState) -> Option<String> {
    Some(match &state.query {
        Some(query) => format!("{}?q={}", state.path, query),
        None => state.path.clone(),
    })
}

fn app_store() -> Store<AppState, AppAction> {
    let options = OptionsBuilder::new()
        .default_location_actions()
        .get_location(location_of)
        .build();
    Store::new(
        AppState {
            path: "/".to_string(),
            query: None,
        },
        reduce,
        options,
    )
}

/// Navigator that counts calls and never echoes back.
struct CountingNavigator {
    location: Mutex<String>,
    calls: Mutex<Vec<String>>,
    listeners: Mutex<Vec<(SubscriptionId, LocationListener)>>,
}

impl CountingNavigator {
    fn new(location: &str) -> Self {
        Self {
            location: Mutex::new(location.to_string()),
            calls: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn external(&self, location: &str) {
        *self.location.lock() = location.to_string();
        let listeners: Vec<LocationListener> =
            self.listeners.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(location);
        }
    }
}

impl Navigator for CountingNavigator {
    fn current_location(&self) -> String {
        self.location.lock().clone()
    }

    fn navigate_to(&self, location: &str) {
        *self.location.lock() = location.to_string();
        self.calls.lock().push(location.to_string());
    }

    fn subscribe(&self, listener: LocationListener) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.listeners.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(entry, _)| *entry != id);
    }
}

#[test]
fn external_change_never_navigates_back_to_itself() {
    let navigator = Arc::new(MemoryNavigator::new("/"));
    let store = app_store();
    store.init_location_sync(navigator.clone());

    navigator.set_location("/search?q=rust");

    assert_eq!(store.state().query.as_deref(), Some("rust"));
    assert!(navigator
        .navigations()
        .iter()
        .all(|location| location != "/search?q=rust"));
    assert!(navigator.navigations().len() <= 1);
}

#[test]
fn non_echoing_navigator_sees_each_target_once() {
    let navigator = Arc::new(CountingNavigator::new("/"));
    let store = app_store();
    store.init_location_sync(navigator.clone());

    store.dispatch(AppAction::Search("lock".to_string()));
    store.dispatch(AppAction::Search("lock".to_string()));
    navigator.external("/docs");
    store.dispatch(AppAction::ClearSearch);

    assert_eq!(
        *navigator.calls.lock(),
        vec!["/search?q=lock".to_string(), "/".to_string()]
    );
    assert_eq!(store.state().path, "/");
}

#[test]
fn time_travel_drives_navigation() {
    let navigator = Arc::new(MemoryNavigator::new("/"));
    let store = app_store();
    store.init_location_sync(navigator.clone());

    store.dispatch(AppAction::Search("a".to_string()));
    store.dispatch(AppAction::Search("b".to_string()));
    store.rewind(1).unwrap();
    assert_eq!(navigator.current_location(), "/search?q=a");

    store.fast_forward(1).unwrap();
    assert_eq!(navigator.current_location(), "/search?q=b");
    assert_eq!(
        navigator.navigations(),
        vec![
            "/search?q=a".to_string(),
            "/search?q=b".to_string(),
            "/search?q=a".to_string(),
            "/search?q=b".to_string(),
        ]
    );
}

#[test]
fn component_lifecycle_with_navigation() {
    let navigator = Arc::new(MemoryNavigator::new("/inbox"));
    let store = app_store();
    let renders = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut connection = {
        let renders = Arc::clone(&renders);
        let seen = Arc::clone(&seen);
        let reader = store.clone();
        Connection::attach(&store, Some(navigator.clone()), move || {
            renders.fetch_add(1, Ordering::SeqCst);
            seen.lock().push(reader.state().path.clone());
        })
    };
    assert_eq!(connection.state().path, "/inbox");

    navigator.set_location("/outbox");
    connection.dispatch(AppAction::Search("draft".to_string()));
    assert_eq!(renders.load(Ordering::SeqCst), 2);
    assert_eq!(
        *seen.lock(),
        vec!["/outbox".to_string(), "/search".to_string()]
    );

    connection.detach();
    store.close();
    assert_eq!(navigator.listener_count(), 0);
    assert_eq!(store.subscriber_count(), 0);

    navigator.set_location("/after-close");
    assert_eq!(store.state().path, "/search");
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

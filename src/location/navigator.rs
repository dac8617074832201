//! The navigation capability consumed by the store.

use crate::subscription::SubscriptionId;
use std::sync::Arc;

/// Callback receiving a newly reported location.
pub type LocationListener = Arc<dyn Fn(&str) + Send + Sync>;

/// An external source of navigation location, such as a router or URI helper.
///
/// Implementations may invoke listeners synchronously from inside
/// [`navigate_to`](Navigator::navigate_to); the store tolerates the echo.
pub trait Navigator: Send + Sync {
    /// The location currently displayed.
    fn current_location(&self) -> String;

    /// Move to `location`.
    fn navigate_to(&self, location: &str);

    /// Register a listener for location changes.
    fn subscribe(&self, listener: LocationListener) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

//! Built-in action dispatched when the navigation location changes.

use serde::{Deserialize, Serialize};

/// Action carrying a new navigation location.
///
/// Applications whose action type implements `From<ChangeLocationAction>`
/// can opt into this action with
/// [`OptionsBuilder::default_location_actions`](crate::options::OptionsBuilder::default_location_actions).
///
/// # Example
///
/// ```rust
/// use rewind_store::core::ChangeLocationAction;
///
/// #[derive(Debug)]
/// enum AppAction {
///     Navigated(String),
/// }
///
/// impl From<ChangeLocationAction> for AppAction {
///     fn from(action: ChangeLocationAction) -> Self {
///         AppAction::Navigated(action.location)
///     }
/// }
///
/// let action: AppAction = ChangeLocationAction::new("/inbox").into();
/// assert!(matches!(action, AppAction::Navigated(ref l) if l == "/inbox"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeLocationAction {
    /// The location reported by the navigator
    pub location: String,
}

impl ChangeLocationAction {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_str_and_string() {
        assert_eq!(ChangeLocationAction::new("/a").location, "/a");
        assert_eq!(ChangeLocationAction::new(String::from("/b")).location, "/b");
    }

    #[test]
    fn action_serializes_correctly() {
        let action = ChangeLocationAction::new("/settings");
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: ChangeLocationAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}

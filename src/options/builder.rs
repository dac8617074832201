//! Fluent builder for [`StoreOptions`].

use super::settings::StoreSettings;
use super::store_options::StoreOptions;
use crate::core::ChangeLocationAction;
use std::sync::Arc;

/// Builder for creating store options
///
/// # Example
///
/// ```rust
/// use rewind_store::options::OptionsBuilder;
///
/// #[derive(Clone)]
/// struct AppState { route: String }
///
/// let options = OptionsBuilder::<AppState, String>::new()
///     .max_historical_records(50)
///     .location_action_creator(|location| format!("navigate:{location}"))
///     .get_location(|state: &AppState| Some(state.route.clone()))
///     .build();
///
/// assert_eq!(options.max_historical_records, Some(50));
/// ```
pub struct OptionsBuilder<S, A> {
    options: StoreOptions<S, A>,
}

impl<S, A> OptionsBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            options: StoreOptions::new(),
        }
    }

    /// Continue configuring existing options
    pub fn from_options(options: StoreOptions<S, A>) -> Self {
        Self { options }
    }

    /// Set how many prior states are kept for rewind
    pub fn max_historical_records(mut self, n: usize) -> Self {
        self.options.max_historical_records = Some(n);
        self
    }

    /// Turn history recording off
    pub fn disable_history(mut self) -> Self {
        self.options.max_historical_records = None;
        self
    }

    /// Build location-change actions with a custom function
    pub fn location_action_creator<F>(mut self, creator: F) -> Self
    where
        F: Fn(&str) -> A + Send + Sync + 'static,
    {
        self.options.location_action_creator = Some(Arc::new(creator));
        self
    }

    /// Dispatch the built-in [`ChangeLocationAction`] on location changes
    pub fn default_location_actions(self) -> Self
    where
        S: 'static,
        A: From<ChangeLocationAction> + 'static,
    {
        self.location_action_creator(|location| A::from(ChangeLocationAction::new(location)))
    }

    /// Derive the displayed location from state
    ///
    /// Runs under the store lock, like the reducer, so it must not call back
    /// into the store.
    pub fn get_location<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&S) -> Option<String> + Send + Sync + 'static,
    {
        self.options.get_location = Some(Arc::new(extractor));
        self
    }

    /// Turn location synchronization off
    pub fn suppress_location_sync(mut self, suppress: bool) -> Self {
        self.options.suppress_location_sync = suppress;
        self
    }

    /// Take history depth and sync suppression from loaded settings
    pub fn settings(mut self, settings: &StoreSettings) -> Self {
        self.options.apply_settings(settings);
        self
    }

    /// Finish configuration.
    pub fn build(self) -> StoreOptions<S, A> {
        self.options
    }
}

impl<S, A> Default for OptionsBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

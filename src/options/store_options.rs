//! Runtime options for a store.

use super::settings::{StoreSettings, DEFAULT_MAX_HISTORICAL_RECORDS};
use std::fmt;
use std::sync::Arc;

/// Builds the action dispatched when the navigator reports a new location.
pub type LocationActionCreator<A> = Arc<dyn Fn(&str) -> A + Send + Sync>;

/// Derives the location a state should be displayed at.
pub type LocationExtractor<S> = Arc<dyn Fn(&S) -> Option<String> + Send + Sync>;

/// Options controlling history depth and location synchronization.
///
/// Defaults: 20 prior states, no location action creator, no location
/// extractor, synchronization enabled.
pub struct StoreOptions<S, A> {
    /// Prior states kept in addition to the current one. `None` disables
    /// history, making rewind and fast-forward report
    /// [`HistoryDisabled`](crate::core::HistoryError::HistoryDisabled).
    pub max_historical_records: Option<usize>,
    /// Creates the action dispatched on external location changes. Without
    /// one, location changes are tracked but nothing is dispatched.
    pub location_action_creator: Option<LocationActionCreator<A>>,
    /// Derives a location from state after each change. Without one, the
    /// last reported location is used, so the store never navigates.
    pub get_location: Option<LocationExtractor<S>>,
    /// Turn location synchronization off entirely.
    pub suppress_location_sync: bool,
}

impl<S, A> StoreOptions<S, A> {
    pub fn new() -> Self {
        Self {
            max_historical_records: Some(DEFAULT_MAX_HISTORICAL_RECORDS),
            location_action_creator: None,
            get_location: None,
            suppress_location_sync: false,
        }
    }

    /// Options carrying the plain-data fields of `settings`.
    pub fn from_settings(settings: &StoreSettings) -> Self {
        let mut options = Self::new();
        options.apply_settings(settings);
        options
    }

    /// Overwrite the plain-data fields from `settings`, keeping closures.
    pub fn apply_settings(&mut self, settings: &StoreSettings) {
        self.max_historical_records = settings.max_historical_records;
        self.suppress_location_sync = settings.suppress_location_sync;
    }

    /// The plain-data fields of these options.
    pub fn settings(&self) -> StoreSettings {
        StoreSettings {
            max_historical_records: self.max_historical_records,
            suppress_location_sync: self.suppress_location_sync,
        }
    }
}

impl<S, A> Default for StoreOptions<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Clone: closures are shared, no bound on S or A.
impl<S, A> Clone for StoreOptions<S, A> {
    fn clone(&self) -> Self {
        Self {
            max_historical_records: self.max_historical_records,
            location_action_creator: self.location_action_creator.clone(),
            get_location: self.get_location.clone(),
            suppress_location_sync: self.suppress_location_sync,
        }
    }
}

impl<S, A> fmt::Debug for StoreOptions<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("max_historical_records", &self.max_historical_records)
            .field(
                "location_action_creator",
                &self.location_action_creator.is_some(),
            )
            .field("get_location", &self.get_location.is_some())
            .field("suppress_location_sync", &self.suppress_location_sync)
            .finish()
    }
}

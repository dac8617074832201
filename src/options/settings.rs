//! Plain-data store settings loadable from configuration files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of prior states retained for time travel.
pub const DEFAULT_MAX_HISTORICAL_RECORDS: usize = 20;

/// Errors raised while loading [`StoreSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid store settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The serializable subset of [`StoreOptions`](super::StoreOptions).
///
/// Missing fields take their defaults, so `{}` is a valid document.
/// An explicit `null` for `max_historical_records` disables history.
///
/// # Example
///
/// ```rust
/// use rewind_store::options::StoreSettings;
///
/// let settings = StoreSettings::from_json(r#"{ "max_historical_records": 5 }"#).unwrap();
/// assert_eq!(settings.max_historical_records, Some(5));
/// assert!(!settings.suppress_location_sync);
///
/// let disabled = StoreSettings::from_json(r#"{ "max_historical_records": null }"#).unwrap();
/// assert_eq!(disabled.max_historical_records, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Prior states kept for rewind, `None` to disable recording
    pub max_historical_records: Option<usize>,
    /// Skip location synchronization entirely
    pub suppress_location_sync: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            max_historical_records: Some(DEFAULT_MAX_HISTORICAL_RECORDS),
            suppress_location_sync: false,
        }
    }
}

impl StoreSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Time-travel errors.

use thiserror::Error;

/// Errors returned by rewind and fast-forward.
///
/// Both variants are pure validation failures: the store is left exactly
/// as it was and no notification is raised.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Not enough recorded entries to move `requested` steps.
    /// `available` is the largest step count that would have succeeded.
    #[error("Cannot move {requested} steps through history, only {available} available")]
    OutOfRange { requested: usize, available: usize },

    /// History recording is turned off (`max_historical_records` is `None`).
    #[error("History recording is disabled for this store")]
    HistoryDisabled,
}

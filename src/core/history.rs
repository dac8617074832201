//! Bounded undo/redo history.
//!
//! [`History`] keeps two stacks of committed snapshots: `past`, whose top is
//! the state currently shown, and `future`, holding entries moved off `past`
//! by a rewind so they can be replayed.
//!
//! ```text
//! dispatch x3                      rewind(1)
//! past:   [s0, s1, s2, s3]         past:   [s0, s1, s2]
//! future: []                       future: [s3]
//! ```
//!
//! Any new commit clears `future`: once a new branch exists, undone entries
//! are unreachable.

use super::error::HistoryError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// An immutable snapshot of committed state.
///
/// Entries are created once per committed state, including the initial
/// state whose `action` is `None`. State and action are shared through
/// [`Arc`], so cloning an entry never copies the snapshot itself.
///
/// # Example
///
/// ```rust
/// use rewind_store::core::HistoryEntry;
///
/// let entry: HistoryEntry<u32, &str> = HistoryEntry::initial(0);
/// assert_eq!(*entry.state, 0);
/// assert!(entry.action.is_none());
///
/// let next = HistoryEntry::committed(1, "increment");
/// assert_eq!(next.action.as_deref(), Some(&"increment"));
/// ```
#[derive(Debug, Serialize)]
#[serde(bound(serialize = "S: Serialize, A: Serialize"))]
pub struct HistoryEntry<S, A> {
    /// The state committed at this point
    pub state: Arc<S>,
    /// The action that produced the state, `None` for the initial state
    pub action: Option<Arc<A>>,
    /// When the state was committed
    pub timestamp: DateTime<Utc>,
}

impl<S, A> HistoryEntry<S, A> {
    /// Entry for the initial state of a store.
    pub fn initial(state: S) -> Self {
        Self::from_shared(Arc::new(state), None)
    }

    /// Entry for a state produced by `action`.
    pub fn committed(state: S, action: A) -> Self {
        Self::from_shared(Arc::new(state), Some(Arc::new(action)))
    }

    pub(crate) fn from_shared(state: Arc<S>, action: Option<Arc<A>>) -> Self {
        Self {
            state,
            action,
            timestamp: Utc::now(),
        }
    }
}

// Manual Clone: only the Arcs are cloned, no bound on S or A.
impl<S, A> Clone for HistoryEntry<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            action: self.action.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// The past/future cursor over committed states.
///
/// # Invariants
///
/// 1. While recording is enabled, `past` is never empty once seeded.
/// 2. `past.len() <= max_records + 1` after every operation.
/// 3. [`commit`](History::commit) always clears `future`.
/// 4. With recording disabled, both stacks stay empty.
///
/// `History` performs no locking; the store wraps it in its critical section.
#[derive(Debug)]
pub struct History<S, A> {
    past: VecDeque<HistoryEntry<S, A>>,
    /// Most recently reverted entry at the back.
    future: Vec<HistoryEntry<S, A>>,
    max_records: Option<usize>,
}

impl<S, A> History<S, A> {
    /// Create an empty history.
    ///
    /// `max_records` is the number of prior states retained in addition to
    /// the current one. `None` disables recording entirely.
    pub fn new(max_records: Option<usize>) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            max_records,
        }
    }

    /// Whether entries are being recorded at all.
    pub fn is_enabled(&self) -> bool {
        self.max_records.is_some()
    }

    /// The configured depth limit.
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    /// Record a new commit and drop every reverted entry.
    pub fn commit(&mut self, entry: HistoryEntry<S, A>) {
        self.push_bounded(entry);
        self.future.clear();
    }

    /// Move `steps` entries from `past` onto `future`.
    ///
    /// Requires `past.len() >= steps + 2`. On success returns the state now
    /// at the top of `past`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind_store::core::{History, HistoryEntry, HistoryError};
    ///
    /// let mut history: History<u32, ()> = History::new(Some(20));
    /// history.commit(HistoryEntry::initial(0));
    /// for n in 1..=3 {
    ///     history.commit(HistoryEntry::committed(n, ()));
    /// }
    ///
    /// assert_eq!(*history.rewind(1).unwrap(), 2);
    /// assert!(matches!(
    ///     history.rewind(2),
    ///     Err(HistoryError::OutOfRange { requested: 2, available: 1 })
    /// ));
    /// ```
    pub fn rewind(&mut self, steps: usize) -> Result<Arc<S>, HistoryError> {
        if !self.is_enabled() {
            return Err(HistoryError::HistoryDisabled);
        }
        let required = steps.saturating_add(2);
        if self.past.len() < required {
            return Err(HistoryError::OutOfRange {
                requested: steps,
                available: self.past.len().saturating_sub(2),
            });
        }

        for _ in 0..steps {
            if let Some(entry) = self.past.pop_back() {
                self.future.push(entry);
            }
        }
        self.current_state().ok_or(HistoryError::OutOfRange {
            requested: steps,
            available: 0,
        })
    }

    /// Move `steps` entries from `future` back onto `past`.
    ///
    /// Requires `future.len() >= steps`. Replayed entries go through the
    /// same depth cap as commits. On success returns the state now at the
    /// top of `past`.
    pub fn fast_forward(&mut self, steps: usize) -> Result<Arc<S>, HistoryError> {
        if !self.is_enabled() {
            return Err(HistoryError::HistoryDisabled);
        }
        if self.future.len() < steps {
            return Err(HistoryError::OutOfRange {
                requested: steps,
                available: self.future.len(),
            });
        }

        for _ in 0..steps {
            if let Some(entry) = self.future.pop() {
                self.push_bounded(entry);
            }
        }
        self.current_state().ok_or(HistoryError::OutOfRange {
            requested: steps,
            available: 0,
        })
    }

    /// The entry at the top of `past`.
    pub fn current(&self) -> Option<&HistoryEntry<S, A>> {
        self.past.back()
    }

    fn current_state(&self) -> Option<Arc<S>> {
        self.current().map(|entry| Arc::clone(&entry.state))
    }

    /// Entries that can be rewound to, oldest first. The last one is current.
    pub fn past(&self) -> impl Iterator<Item = &HistoryEntry<S, A>> {
        self.past.iter()
    }

    /// Reverted entries, most recently reverted last.
    pub fn future(&self) -> &[HistoryEntry<S, A>] {
        &self.future
    }

    /// Number of recorded entries, the current one included.
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of reverted entries waiting to be replayed.
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    fn push_bounded(&mut self, entry: HistoryEntry<S, A>) {
        let Some(max) = self.max_records else {
            return;
        };

        while self.past.len() > max {
            self.past.pop_front();
            tracing::trace!(max_records = max, "evicted oldest history entry");
        }
        self.past.push_back(entry);
    }
}

//! Reducer function type.

use std::sync::Arc;

/// A pure function computing the next state from the current state and an action.
///
/// Reducers must return a new value and never mutate shared state, so that
/// history entries stay independent. A reducer that panics unwinds to the
/// caller of [`Store::dispatch`](crate::store::Store::dispatch); the store's
/// state is left untouched.
pub type Reducer<S, A> = Arc<dyn Fn(&S, &A) -> S + Send + Sync>;

/// Wrap a closure as a [`Reducer`].
///
/// # Example
///
/// ```rust
/// use rewind_store::core::reducer;
///
/// let add = reducer(|count: &i64, delta: &i64| count + delta);
/// assert_eq!(add(&2, &3), 5);
/// ```
pub fn reducer<S, A, F>(f: F) -> Reducer<S, A>
where
    F: Fn(&S, &A) -> S + Send + Sync + 'static,
{
    Arc::new(f)
}

//! Singleton and scoped store provisioning.

use crate::core::Reducer;
use crate::options::StoreOptions;
use crate::store::Store;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Hands out stores built from one initial state, reducer and option set.
///
/// [`singleton`](StoreFactory::singleton) returns the same store on every
/// call, for one store per process. [`scoped`](StoreFactory::scoped)
/// returns a fresh store per call, for one store per session.
///
/// # Example
///
/// ```
/// use rewind_store::builder::StoreBuilder;
///
/// #[derive(Debug)]
/// struct Increment;
///
/// let factory = StoreBuilder::new()
///     .initial(0u64)
///     .reducer(|n: &u64, _: &Increment| n + 1)
///     .into_factory()
///     .unwrap();
///
/// let session = factory.scoped();
/// session.dispatch(Increment);
///
/// assert_eq!(*session.state(), 1);
/// assert_eq!(*factory.scoped().state(), 0);
/// assert_eq!(*factory.singleton().state(), 0);
/// ```
pub struct StoreFactory<S, A> {
    initial: Arc<S>,
    reducer: Reducer<S, A>,
    options: StoreOptions<S, A>,
    singleton: OnceLock<Store<S, A>>,
}

impl<S, A> StoreFactory<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    pub(crate) fn new(initial: S, reducer: Reducer<S, A>, options: StoreOptions<S, A>) -> Self {
        Self {
            initial: Arc::new(initial),
            reducer,
            options,
            singleton: OnceLock::new(),
        }
    }

    /// The process-wide store, created on first use.
    pub fn singleton(&self) -> Store<S, A>
    where
        S: Clone,
    {
        self.singleton
            .get_or_init(|| {
                tracing::debug!("creating singleton store");
                self.scoped()
            })
            .clone()
    }

    /// A new, independent store starting from the initial state.
    pub fn scoped(&self) -> Store<S, A>
    where
        S: Clone,
    {
        Store::from_reducer(
            S::clone(&self.initial),
            Arc::clone(&self.reducer),
            self.options.clone(),
        )
    }

    /// Options shared by every store this factory creates.
    pub fn options(&self) -> &StoreOptions<S, A> {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::StoreBuilder;

    #[derive(Debug)]
    struct Push(&'static str);

    fn factory() -> super::StoreFactory<Vec<&'static str>, Push> {
        StoreBuilder::new()
            .initial(Vec::new())
            .reducer(|items: &Vec<&'static str>, action: &Push| {
                let mut next = items.clone();
                next.push(action.0);
                next
            })
            .configure(|options| options.max_historical_records(3))
            .into_factory()
            .unwrap()
    }

    #[test]
    fn singleton_is_shared() {
        let factory = factory();
        factory.singleton().dispatch(Push("a"));

        assert_eq!(*factory.singleton().state(), vec!["a"]);
    }

    #[test]
    fn scoped_stores_are_independent() {
        let factory = factory();
        let first = factory.scoped();
        let second = factory.scoped();

        first.dispatch(Push("x"));
        assert_eq!(first.state().len(), 1);
        assert!(second.state().is_empty());
        assert!(factory.singleton().state().is_empty());
    }

    #[test]
    fn scoped_stores_inherit_options() {
        let factory = factory();
        let store = factory.scoped();
        for item in ["a", "b", "c", "d", "e"] {
            store.dispatch(Push(item));
        }

        assert_eq!(store.options().max_historical_records, Some(3));
        assert_eq!(store.past_len(), 4);
        assert_eq!(factory.options().max_historical_records, Some(3));
    }
}

//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::builder::factory::StoreFactory;
use crate::core::Reducer;
use crate::options::{OptionsBuilder, StoreOptions, StoreSettings};
use crate::store::Store;
use std::fmt;
use std::sync::Arc;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```
/// use rewind_store::builder::StoreBuilder;
///
/// #[derive(Debug)]
/// struct Add(i32);
///
/// let store = StoreBuilder::new()
///     .initial(0)
///     .reducer(|total: &i32, action: &Add| total + action.0)
///     .configure(|options| options.max_historical_records(5))
///     .build()
///     .unwrap();
///
/// store.dispatch(Add(2));
/// assert_eq!(*store.state(), 2);
/// assert_eq!(store.options().max_historical_records, Some(5));
/// ```
pub struct StoreBuilder<S, A> {
    initial: Option<S>,
    reducer: Option<Reducer<S, A>>,
    options: StoreOptions<S, A>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducer: None,
            options: StoreOptions::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the root reducer (required).
    pub fn reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.reducer = Some(Arc::new(reducer));
        self
    }

    /// Set an already shared root reducer.
    pub fn shared_reducer(mut self, reducer: Reducer<S, A>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Replace the options wholesale.
    pub fn options(mut self, options: StoreOptions<S, A>) -> Self {
        self.options = options;
        self
    }

    /// Adjust the options through an [`OptionsBuilder`] seeded with the
    /// current ones.
    pub fn configure<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(OptionsBuilder<S, A>) -> OptionsBuilder<S, A>,
    {
        self.options = configure(OptionsBuilder::from_options(self.options)).build();
        self
    }

    /// Apply loaded settings to the options.
    pub fn settings(mut self, settings: &StoreSettings) -> Self {
        self.options.apply_settings(settings);
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        Ok(Store::from_reducer(initial, reducer, self.options))
    }

    /// Build a factory that hands out singleton or scoped stores.
    /// Returns an error if required fields are missing.
    pub fn into_factory(self) -> Result<StoreFactory<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        Ok(StoreFactory::new(initial, reducer, self.options))
    }
}

impl<S, A> Default for StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

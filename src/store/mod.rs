//! The runtime container that owns state and drives reducers.
//!
//! A [`Store`] holds the current state and a reducer. [`Store::send`] runs
//! the reducer, notifies observers, then runs each returned effect in order
//! and sends its action back into the same store, depth first, before
//! returning to the caller.
//!
//! [`Store::view`] derives a child store over a projection of the state and
//! one case of the actions. The child forwards its actions to the parent and
//! re-derives its state from every parent change. A child keeps its parent
//! alive; the parent only observes the child weakly.
//!
//! Stores are single-threaded handles (`Rc` inside); cloning a store clones
//! the handle, not the state.
//!
//! # Example
//!
//! ```
//! use statecraft::effect::{none, Effect, Effects};
//! use statecraft::effects;
//! use statecraft::store::Store;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct State { value: Option<i64> }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Action { Load, Loaded(i64) }
//!
//! fn reducer(state: &mut State, action: Action) -> Effects<Action> {
//!     match action {
//!         Action::Load => effects![Effect::new(|| Action::Loaded(42))],
//!         Action::Loaded(value) => {
//!             state.value = Some(value);
//!             none()
//!         }
//!     }
//! }
//!
//! let store = Store::new(State::default(), reducer);
//! store.send(Action::Load);
//! assert_eq!(store.state().value, Some(42));
//! ```

mod config;
mod subscription;

pub use config::StoreConfig;
pub use subscription::Subscription;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::effect::Effects;
use crate::error::DispatchError;
use crate::paths::{CasePath, IdentityCasePath};
use crate::reducer::Reducer;
use subscription::Observers;

/// Produces the state of a scoped store after forwarding one of its actions.
type Forward<State, Action> = Box<dyn Fn(Action) -> Result<State, DispatchError>>;

/// How a store turns an action into a state change.
enum Driver<State, Action> {
    /// Runs a reducer on the store's own state.
    Reduce(Box<dyn Reducer<State, Action>>),
    /// Sends the action to a parent store and adopts the projected result.
    Forward(Forward<State, Action>),
}

struct StoreInner<State, Action> {
    state: RefCell<State>,
    driver: Driver<State, Action>,
    observers: Rc<RefCell<Observers<State>>>,
    config: StoreConfig,
    depth: Cell<usize>,
    /// A parent projection that arrived while `state` was borrowed.
    pending: RefCell<Option<State>>,
    parent_link: RefCell<Option<Subscription>>,
}

/// A mutable container for application state.
///
/// # Type Parameters
///
/// - `State`: The value the store owns
/// - `Action`: The events the store accepts
pub struct Store<State, Action> {
    inner: Rc<StoreInner<State, Action>>,
}

impl<State, Action> Store<State, Action>
where
    State: 'static,
    Action: 'static,
{
    /// Creates a store with `initial_state` driven by `reducer`.
    pub fn new<R>(initial_state: State, reducer: R) -> Self
    where
        R: Reducer<State, Action> + 'static,
    {
        Self::with_config(initial_state, reducer, StoreConfig::default())
    }

    /// Creates a store with explicit [`StoreConfig`].
    pub fn with_config<R>(initial_state: State, reducer: R, config: StoreConfig) -> Self
    where
        R: Reducer<State, Action> + 'static,
    {
        Self::from_driver(initial_state, Driver::Reduce(Box::new(reducer)), config)
    }

    fn from_driver(initial_state: State, driver: Driver<State, Action>, config: StoreConfig) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(initial_state),
                driver,
                observers: Rc::new(RefCell::new(Observers::new())),
                config,
                depth: Cell::new(0),
                pending: RefCell::new(None),
                parent_link: RefCell::new(None),
            }),
        }
    }

    /// Dispatches `action` and every action its effects produce, transitively.
    ///
    /// Effects run in the order the reducer returned them, and the action of
    /// each effect is fully processed, including its own effects, before the
    /// next effect runs. Control returns once the whole tree is processed.
    ///
    /// An action refused because of the configured depth cap is logged at
    /// `WARN`. Refusal stops the whole dispatch: the effects not yet run at
    /// every level above the refused action are abandoned too, siblings
    /// within the cap included. Use [`try_send`](Self::try_send) to observe
    /// the refusal.
    ///
    /// # Panics
    ///
    /// Panics if called on a store from inside its own reducer, or from an
    /// observer of the same store, while the state is borrowed.
    pub fn send(&self, action: Action) {
        match self.try_send(action) {
            Ok(()) => {}
            Err(error @ DispatchError::Reentrant { .. }) => panic!("{error}"),
            Err(error) => {
                tracing::warn!(store = %self.label(), %error, "action dropped");
            }
        }
    }

    /// Like [`send`](Self::send), but reports refused actions instead of
    /// logging them.
    ///
    /// When an action deep in an effect chain is refused, the effects not yet
    /// run at every level above it are dropped, siblings within the cap
    /// included, and the error is returned. State changes already made stay.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Reentrant`] if the store's state is currently borrowed
    /// - [`DispatchError::DepthExceeded`] if an effect chain nests deeper than
    ///   [`StoreConfig::max_dispatch_depth`]
    pub fn try_send(&self, action: Action) -> Result<(), DispatchError> {
        self.apply_pending();
        let depth = self.inner.depth.get();
        if let Some(limit) = self.inner.config.max_dispatch_depth()
            && depth > limit
        {
            return Err(DispatchError::DepthExceeded {
                store: self.label().to_owned(),
                limit,
            });
        }

        let effects = self.apply(action)?;
        tracing::trace!(store = %self.label(), depth, effects = effects.len(), "dispatched action");
        self.notify();

        if effects.is_empty() {
            return Ok(());
        }

        let _nested = DepthGuard::enter(&self.inner.depth, depth + 1);
        for effect in effects {
            self.try_send(effect.run())?;
        }
        Ok(())
    }

    fn apply(&self, action: Action) -> Result<Effects<Action>, DispatchError> {
        match &self.inner.driver {
            Driver::Reduce(reducer) => {
                let mut state = self
                    .inner
                    .state
                    .try_borrow_mut()
                    .map_err(|_| self.reentrant())?;
                Ok(reducer.reduce(&mut state, action))
            }
            Driver::Forward(forward) => {
                let projected = forward(action)?;
                self.replace_state(projected)?;
                Ok(Effects::new())
            }
        }
    }

    fn replace_state(&self, state: State) -> Result<(), DispatchError> {
        let mut current = self
            .inner
            .state
            .try_borrow_mut()
            .map_err(|_| self.reentrant())?;
        *current = state;
        drop(current);
        self.inner.pending.borrow_mut().take();
        Ok(())
    }

    /// Calls every observer still registered, in subscription order. An
    /// observer detached by an earlier one during the same pass is skipped.
    fn notify(&self) {
        let observers = self.inner.observers.borrow().snapshot();
        if !observers.is_empty() {
            let state = self.inner.state.borrow();
            for (id, observer) in observers {
                if self.inner.observers.borrow().contains(id) {
                    observer(&state);
                }
            }
        }
        self.apply_pending();
    }

    /// Adopts a parent projection deferred by [`sync_from_parent`](Self::sync_from_parent)
    /// once the state is no longer borrowed, and notifies observers of it.
    fn apply_pending(&self) {
        let Some(projected) = self.inner.pending.borrow_mut().take() else {
            return;
        };
        match self.inner.state.try_borrow_mut() {
            Ok(mut state) => *state = projected,
            Err(_) => {
                *self.inner.pending.borrow_mut() = Some(projected);
                return;
            }
        }
        tracing::trace!(store = %self.label(), "applied deferred parent sync");
        self.notify();
    }

    /// Runs `function` with a shared borrow of the current state.
    ///
    /// A parent change that arrives while `function` runs is applied once it
    /// returns.
    ///
    /// # Panics
    ///
    /// Panics if called from inside this store's own reducer.
    pub fn with_state<R>(&self, function: impl FnOnce(&State) -> R) -> R {
        self.apply_pending();
        let result = function(&self.inner.state.borrow());
        self.apply_pending();
        result
    }

    /// Returns a copy of the current state.
    ///
    /// # Panics
    ///
    /// Panics if called from inside this store's own reducer.
    pub fn state(&self) -> State
    where
        State: Clone,
    {
        self.with_state(State::clone)
    }

    /// Registers `observer` to be called with the new state after every
    /// dispatch, including dispatches that leave the state unchanged.
    ///
    /// Observers run synchronously, in subscription order, after the
    /// mutation and before any effect runs. The observer is not called with
    /// the current state on subscription.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&State) + 'static,
    {
        let id = self.inner.observers.borrow_mut().insert(Rc::new(observer));
        Subscription::new(&self.inner.observers, id)
    }

    /// Returns the number of registered observers, scoped stores included.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Returns the label from this store's [`StoreConfig`].
    pub fn label(&self) -> &str {
        self.inner.config.label()
    }

    /// Derives a store over a projection of this store's state and one case
    /// of its actions.
    ///
    /// - The child starts with `to_local` applied to the current state.
    /// - Sending to the child embeds the action with `case_path`, sends it to
    ///   this store (running the full reducer and effect chain), then sets the
    ///   child's state to `to_local` of the result. The child itself never
    ///   produces effects.
    /// - Every state change of this store is projected into the child.
    ///
    /// The child holds this store strongly, so a view of a temporary store
    /// keeps working. This store only observes the child weakly: once every
    /// handle to the child is dropped it stops observing.
    ///
    /// # Panics
    ///
    /// Panics if called from inside this store's own reducer.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft::effect::{none, Effects};
    /// use statecraft::case_path;
    /// use statecraft::store::Store;
    ///
    /// #[derive(Debug, Clone, Default)]
    /// struct AppState { count: i64, name: String }
    ///
    /// #[derive(Debug, Clone)]
    /// enum AppAction { Counter(i64), Rename(String) }
    ///
    /// fn app(state: &mut AppState, action: AppAction) -> Effects<AppAction> {
    ///     match action {
    ///         AppAction::Counter(delta) => state.count += delta,
    ///         AppAction::Rename(name) => state.name = name,
    ///     }
    ///     none()
    /// }
    ///
    /// let store = Store::new(AppState::default(), app);
    /// let counter = store.view(|state: &AppState| state.count, case_path!(AppAction, Counter));
    ///
    /// counter.send(2);
    /// assert_eq!(store.state().count, 2);
    /// assert_eq!(counter.state(), 2);
    ///
    /// store.send(AppAction::Counter(3));
    /// assert_eq!(counter.state(), 5);
    /// ```
    pub fn view<LocalState, LocalAction, F, C>(
        &self,
        to_local: F,
        case_path: C,
    ) -> Store<LocalState, LocalAction>
    where
        LocalState: 'static,
        LocalAction: 'static,
        F: Fn(&State) -> LocalState + 'static,
        C: CasePath<Action, LocalAction> + 'static,
    {
        let to_local = Rc::new(to_local);
        let config = self.inner.config.scoped();
        let initial_state = self.with_state(|state| to_local(state));

        let forward = {
            let parent = self.clone();
            let project = Rc::clone(&to_local);
            move |local_action: LocalAction| -> Result<LocalState, DispatchError> {
                parent.try_send(case_path.embed(local_action))?;
                Ok(parent.with_state(|state| project(state)))
            }
        };

        let child = Store::from_driver(initial_state, Driver::Forward(Box::new(forward)), config);

        let sync = {
            let child = Rc::downgrade(&child.inner);
            self.subscribe(move |state: &State| {
                if let Some(inner) = child.upgrade() {
                    Store { inner }.sync_from_parent(to_local(state));
                }
            })
        };
        *child.inner.parent_link.borrow_mut() = Some(sync);

        tracing::debug!(parent = %self.label(), store = %child.label(), "scoped store created");
        child
    }

    /// Derives a store over a projection of this store's state that accepts
    /// this store's own actions.
    pub fn view_state<LocalState, F>(&self, to_local: F) -> Store<LocalState, Action>
    where
        LocalState: 'static,
        F: Fn(&State) -> LocalState + 'static,
    {
        self.view(to_local, IdentityCasePath)
    }

    /// Adopts a new parent projection, or defers it while the state is
    /// borrowed. Only the latest deferred projection is kept.
    fn sync_from_parent(&self, state: State) {
        if let Ok(mut current) = self.inner.state.try_borrow_mut() {
            *current = state;
        } else {
            tracing::debug!(store = %self.label(), "deferred parent sync while state was borrowed");
            *self.inner.pending.borrow_mut() = Some(state);
            return;
        }
        self.inner.pending.borrow_mut().take();
        self.notify();
    }

    fn reentrant(&self) -> DispatchError {
        DispatchError::Reentrant {
            store: self.label().to_owned(),
        }
    }
}

/// Sets the dispatch depth for the duration of an effect loop and restores it
/// afterwards, including when an effect panics.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
    previous: usize,
}

impl<'a> DepthGuard<'a> {
    fn enter(depth: &'a Cell<usize>, nested: usize) -> Self {
        let previous = depth.replace(nested);
        Self { depth, previous }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.previous);
    }
}

impl<State, Action> Clone for Store<State, Action> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<State, Action> std::fmt::Debug for Store<State, Action> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Store")
            .field("label", &self.inner.config.label())
            .field("scoped", &matches!(self.inner.driver, Driver::Forward(_)))
            .field("depth", &self.inner.depth.get())
            .finish_non_exhaustive()
    }
}

impl<State, Action> Drop for StoreInner<State, Action> {
    fn drop(&mut self) {
        if self.parent_link.get_mut().is_some() {
            tracing::debug!(store = %self.config.label(), "scoped store released");
        }
    }
}

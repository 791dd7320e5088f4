//! Reducers and the combinators that assemble them.
//!
//! A [`Reducer`] mutates state in place for one action and returns the
//! effects to run afterwards. Small reducers are written against their own
//! local state and action types, lifted into the application's types with
//! [`pullback`], and merged with [`combine`].
//!
//! # Example
//!
//! ```
//! use statecraft::effect::{none, Effects};
//! use statecraft::reducer::{combine, pullback, Reducer, ReducerExt};
//! use statecraft::{case_path, key_path};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct AppState { count: i64, log: Vec<String> }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AppAction { Counter(CounterAction), Log(String) }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum CounterAction { Increment }
//!
//! fn counter(count: &mut i64, action: CounterAction) -> Effects<CounterAction> {
//!     match action {
//!         CounterAction::Increment => *count += 1,
//!     }
//!     none()
//! }
//!
//! fn log(log: &mut Vec<String>, line: String) -> Effects<String> {
//!     log.push(line);
//!     none()
//! }
//!
//! let app = combine(vec![
//!     pullback(counter, key_path!(AppState, count), case_path!(AppAction, Counter)).boxed(),
//!     pullback(log, key_path!(AppState, log), case_path!(AppAction, Log)).boxed(),
//! ]);
//!
//! let mut state = AppState::default();
//! let effects = app.reduce(&mut state, AppAction::Counter(CounterAction::Increment));
//! assert!(effects.is_empty());
//! assert_eq!(state.count, 1);
//! assert!(state.log.is_empty());
//! ```

mod combine;
mod logged;
mod pullback;

pub use combine::CombineWith;
pub use combine::Combined;
pub use combine::combine;
pub use logged::Logged;
pub use pullback::Pullback;
pub use pullback::pullback;

use crate::effect::Effects;
use crate::paths::{CasePath, KeyPath};

/// Computes a state transition and follow-up effects for an action.
///
/// Reducers must not perform side effects themselves; any work whose result
/// should feed back into the store is returned as an [`Effect`](crate::effect::Effect).
///
/// Every `Fn(&mut State, Action) -> Effects<Action>` is a reducer.
pub trait Reducer<State, Action> {
    /// Applies `action` to `state` in place and returns the effects to run
    /// after the mutation, in order.
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action>;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&mut State, Action) -> Effects<Action>,
{
    #[inline]
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action> {
        self(state, action)
    }
}

/// A type-erased reducer.
///
/// Lets reducers of different concrete types live in one list, which is what
/// [`combine`] takes.
pub struct BoxedReducer<State, Action> {
    inner: Box<dyn Reducer<State, Action>>,
}

impl<State, Action> BoxedReducer<State, Action> {
    /// Erases the concrete type of `reducer`.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<State, Action> + 'static,
    {
        Self {
            inner: Box::new(reducer),
        }
    }
}

impl<State, Action> Reducer<State, Action> for BoxedReducer<State, Action> {
    #[inline]
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action> {
        self.inner.reduce(state, action)
    }
}

impl<State, Action> std::fmt::Debug for BoxedReducer<State, Action> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("BoxedReducer").finish_non_exhaustive()
    }
}

/// Method-style access to the reducer combinators.
pub trait ReducerExt<State, Action>: Reducer<State, Action> + Sized {
    /// Lifts this reducer into a larger state and action space.
    ///
    /// Method form of [`pullback`].
    fn pullback<GlobalState, GlobalAction, K, C>(
        self,
        key_path: K,
        case_path: C,
    ) -> Pullback<Self, K, C, State, Action>
    where
        K: KeyPath<GlobalState, State>,
        C: CasePath<GlobalAction, Action>,
    {
        pullback(self, key_path, case_path)
    }

    /// Runs this reducer, then `other`, on the same state.
    ///
    /// Effects are concatenated: this reducer's first, then `other`'s.
    fn combine_with<R>(self, other: R) -> CombineWith<Self, R>
    where
        R: Reducer<State, Action>,
    {
        CombineWith::new(self, other)
    }

    /// Wraps this reducer so every action it handles is traced at `DEBUG`.
    fn logged(self, label: impl Into<String>) -> Logged<Self> {
        Logged::new(self, label)
    }

    /// Erases the concrete reducer type.
    fn boxed(self) -> BoxedReducer<State, Action>
    where
        Self: 'static,
    {
        BoxedReducer::new(self)
    }
}

impl<State, Action, R> ReducerExt<State, Action> for R where R: Reducer<State, Action> {}

//! A higher-order reducer that traces every action it handles.

use std::fmt::Debug;

use super::Reducer;
use crate::effect::Effects;

/// Wraps a reducer and emits a `DEBUG` event per action with the action, the
/// resulting state and the number of effects produced.
///
/// Created by [`ReducerExt::logged`](super::ReducerExt::logged). Formatting is
/// skipped entirely when `DEBUG` is disabled for this module.
///
/// # Example
///
/// ```
/// use statecraft::effect::{none, Effects};
/// use statecraft::reducer::{Reducer, ReducerExt};
///
/// fn counter(count: &mut i64, delta: i64) -> Effects<i64> {
///     *count += delta;
///     none()
/// }
///
/// let reducer = counter.logged("counter");
/// let mut count = 0;
/// let _ = reducer.reduce(&mut count, 3);
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Logged<R> {
    reducer: R,
    label: String,
}

impl<R> Logged<R> {
    /// Wraps `reducer`, tagging its events with `label`.
    pub fn new(reducer: R, label: impl Into<String>) -> Self {
        Self {
            reducer,
            label: label.into(),
        }
    }

    /// Returns the label attached to this reducer's events.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<State, Action, R> Reducer<State, Action> for Logged<R>
where
    State: Debug,
    Action: Debug,
    R: Reducer<State, Action>,
{
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action> {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return self.reducer.reduce(state, action);
        }

        let received = format!("{action:?}");
        let effects = self.reducer.reduce(state, action);
        tracing::debug!(
            reducer = %self.label,
            action = %received,
            state = ?state,
            effects = effects.len(),
            "reduced action"
        );
        effects
    }
}

//! Merging reducers that share a state and action type.

use super::{BoxedReducer, Reducer};
use crate::effect::Effects;

/// Several reducers run one after another on the same state.
///
/// Created by [`combine`] or the [`combine!`](crate::combine) macro.
pub struct Combined<State, Action> {
    reducers: Vec<BoxedReducer<State, Action>>,
}

/// Merges `reducers` into one reducer.
///
/// For every action, each reducer runs in list order against the same
/// mutable state, so later reducers observe earlier mutations. None of them
/// can short-circuit the rest. The resulting effects are each reducer's
/// effects concatenated in list order.
///
/// # Example
///
/// ```
/// use statecraft::effect::{none, Effects};
/// use statecraft::reducer::{combine, Reducer, ReducerExt};
///
/// fn double(value: &mut i32, _: ()) -> Effects<()> {
///     *value *= 2;
///     none()
/// }
///
/// fn add_one(value: &mut i32, _: ()) -> Effects<()> {
///     *value += 1;
///     none()
/// }
///
/// let reducer = combine(vec![double.boxed(), add_one.boxed()]);
/// let mut value = 5;
/// let _ = reducer.reduce(&mut value, ());
/// assert_eq!(value, 11);
/// ```
pub fn combine<State, Action>(reducers: Vec<BoxedReducer<State, Action>>) -> Combined<State, Action>
where
    Action: Clone,
{
    Combined { reducers }
}

impl<State, Action> Combined<State, Action> {
    /// Returns the number of merged reducers.
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns `true` if no reducers were merged.
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<State, Action> Reducer<State, Action> for Combined<State, Action>
where
    Action: Clone,
{
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action> {
        let mut effects = Effects::new();
        if let Some((last, rest)) = self.reducers.split_last() {
            for reducer in rest {
                effects.extend(reducer.reduce(state, action.clone()));
            }
            effects.extend(last.reduce(state, action));
        }
        effects
    }
}

impl<State, Action> std::fmt::Debug for Combined<State, Action> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Combined")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

/// Two reducers run one after the other, without boxing.
///
/// Created by [`ReducerExt::combine_with`](super::ReducerExt::combine_with).
#[derive(Debug, Clone)]
pub struct CombineWith<R1, R2> {
    first: R1,
    second: R2,
}

impl<R1, R2> CombineWith<R1, R2> {
    /// Runs `first`, then `second`.
    #[must_use]
    pub const fn new(first: R1, second: R2) -> Self {
        Self { first, second }
    }
}

impl<State, Action, R1, R2> Reducer<State, Action> for CombineWith<R1, R2>
where
    Action: Clone,
    R1: Reducer<State, Action>,
    R2: Reducer<State, Action>,
{
    fn reduce(&self, state: &mut State, action: Action) -> Effects<Action> {
        let mut effects = self.first.reduce(state, action.clone());
        effects.extend(self.second.reduce(state, action));
        effects
    }
}

/// Merges any number of reducers into a [`Combined`] reducer.
///
/// Each argument is boxed, so reducers of different concrete types can be
/// mixed freely.
///
/// # Example
///
/// ```
/// use statecraft::combine;
/// use statecraft::effect::{Effect, Effects};
/// use statecraft::effects;
/// use statecraft::reducer::Reducer;
///
/// let reducer = combine!(
///     |log: &mut Vec<&'static str>, action: u8| -> Effects<u8> {
///         log.push("first");
///         effects![Effect::send(action + 1)]
///     },
///     |log: &mut Vec<&'static str>, action: u8| -> Effects<u8> {
///         log.push("second");
///         effects![Effect::send(action + 2)]
///     },
/// );
///
/// let mut log = Vec::new();
/// let actions: Vec<u8> = reducer.reduce(&mut log, 0).into_iter().map(Effect::run).collect();
/// assert_eq!(log, vec!["first", "second"]);
/// assert_eq!(actions, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! combine {
    ($($reducer:expr),+ $(,)?) => {
        $crate::reducer::combine(vec![$($crate::reducer::BoxedReducer::new($reducer)),+])
    };
}

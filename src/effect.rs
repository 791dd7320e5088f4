//! Deferred units of work returned by reducers.
//!
//! An [`Effect`] is a single-shot computation that produces the next action.
//! Reducers return them in an ordered [`Effects`] sequence; the store runs
//! each one right after the state change that produced it and feeds the
//! resulting action back through `send`.
//!
//! # Examples
//!
//! ```
//! use statecraft::effect::{Effect, Effects};
//! use statecraft::effects;
//!
//! #[derive(Debug, PartialEq)]
//! enum Action { Load, Loaded(i64) }
//!
//! let effects: Effects<Action> = effects![Effect::new(|| Action::Loaded(42))];
//! let actions: Vec<Action> = effects.into_iter().map(Effect::run).collect();
//! assert_eq!(actions, vec![Action::Loaded(42)]);
//! ```

use smallvec::SmallVec;

/// The ordered effect sequence a reducer returns.
///
/// Most reducers return zero or one effect, so up to four are stored inline.
pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

/// A deferred computation that yields an action when run.
///
/// Effects are opaque: they cannot be inspected, compared or cancelled, and
/// they run at most once.
#[must_use = "effects do nothing unless run"]
pub struct Effect<Action> {
    work: Box<dyn FnOnce() -> Action>,
}

impl<Action> Effect<Action> {
    /// Wraps `work` as an effect.
    pub fn new<F>(work: F) -> Self
    where
        F: FnOnce() -> Action + 'static,
    {
        Self {
            work: Box::new(work),
        }
    }

    /// Creates an effect that yields an action that is already known.
    pub fn send(action: Action) -> Self
    where
        Action: 'static,
    {
        Self::new(move || action)
    }

    /// Runs the effect, producing its action.
    pub fn run(self) -> Action {
        (self.work)()
    }

    /// Transforms the action this effect will produce.
    ///
    /// This is how a local effect becomes a global one: the local action is
    /// embedded into the global action type once the effect runs.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft::effect::Effect;
    ///
    /// let local = Effect::new(|| 20);
    /// let global = local.map(|value| value * 2 + 2);
    /// assert_eq!(global.run(), 42);
    /// ```
    pub fn map<Other, F>(self, function: F) -> Effect<Other>
    where
        Action: 'static,
        F: FnOnce(Action) -> Other + 'static,
    {
        Effect::new(move || function(self.run()))
    }
}

impl<Action> std::fmt::Debug for Effect<Action> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Effect").finish_non_exhaustive()
    }
}

/// Returns an empty effect sequence.
///
/// Reducers use this for the common "state changed, nothing else to do" case.
#[inline]
#[must_use]
pub fn none<Action>() -> Effects<Action> {
    Effects::new()
}

/// Builds an [`Effects`] sequence from a list of effects.
///
/// # Example
///
/// ```
/// use statecraft::effect::{Effect, Effects};
/// use statecraft::effects;
///
/// let empty: Effects<u8> = effects![];
/// assert!(empty.is_empty());
///
/// let two: Effects<u8> = effects![Effect::send(1), Effect::new(|| 2)];
/// assert_eq!(two.len(), 2);
/// ```
#[macro_export]
macro_rules! effects {
    () => {
        $crate::effect::Effects::new()
    };
    ($($effect:expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($effect),+]
    };
}

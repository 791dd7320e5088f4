//! Lifting a local reducer into a global state and action space.

use std::marker::PhantomData;
use std::rc::Rc;

use super::Reducer;
use crate::effect::{Effects, none};
use crate::paths::{CasePath, KeyPath};

/// A reducer over `(LocalState, LocalAction)` seen as a reducer over a larger
/// `(GlobalState, GlobalAction)`.
///
/// Created by [`pullback`] or [`ReducerExt::pullback`](super::ReducerExt::pullback).
pub struct Pullback<R, K, C, LocalState, LocalAction> {
    reducer: R,
    key_path: K,
    case_path: Rc<C>,
    _marker: PhantomData<fn(&mut LocalState, LocalAction)>,
}

/// Lifts `reducer` so it runs on the part of the global state reached through
/// `key_path`, for the global actions `case_path` can extract.
///
/// Global actions of any other case leave the state untouched and produce no
/// effects. Local effects are mapped, in order, to effects whose actions are
/// embedded back into the global action type.
///
/// # Example
///
/// ```
/// use statecraft::effect::{Effect, Effects};
/// use statecraft::effects;
/// use statecraft::reducer::{pullback, Reducer};
/// use statecraft::{case_path, key_path};
///
/// #[derive(Default)]
/// struct AppState { value: Option<i64> }
///
/// #[derive(Debug, PartialEq)]
/// enum AppAction { Fetch(FetchAction), Other }
///
/// #[derive(Debug, PartialEq)]
/// enum FetchAction { Load, Loaded(i64) }
///
/// fn fetch(value: &mut Option<i64>, action: FetchAction) -> Effects<FetchAction> {
///     match action {
///         FetchAction::Load => effects![Effect::new(|| FetchAction::Loaded(42))],
///         FetchAction::Loaded(loaded) => {
///             *value = Some(loaded);
///             effects![]
///         }
///     }
/// }
///
/// let app = pullback(fetch, key_path!(AppState, value), case_path!(AppAction, Fetch));
/// let mut state = AppState::default();
///
/// assert!(app.reduce(&mut state, AppAction::Other).is_empty());
///
/// let effects = app.reduce(&mut state, AppAction::Fetch(FetchAction::Load));
/// let actions: Vec<AppAction> = effects.into_iter().map(Effect::run).collect();
/// assert_eq!(actions, vec![AppAction::Fetch(FetchAction::Loaded(42))]);
/// ```
pub fn pullback<R, K, C, LocalState, LocalAction>(
    reducer: R,
    key_path: K,
    case_path: C,
) -> Pullback<R, K, C, LocalState, LocalAction>
where
    R: Reducer<LocalState, LocalAction>,
{
    Pullback {
        reducer,
        key_path,
        case_path: Rc::new(case_path),
        _marker: PhantomData,
    }
}

impl<GlobalState, GlobalAction, LocalState, LocalAction, R, K, C> Reducer<GlobalState, GlobalAction>
    for Pullback<R, K, C, LocalState, LocalAction>
where
    R: Reducer<LocalState, LocalAction>,
    K: KeyPath<GlobalState, LocalState>,
    C: CasePath<GlobalAction, LocalAction> + 'static,
    LocalAction: 'static,
{
    fn reduce(&self, state: &mut GlobalState, action: GlobalAction) -> Effects<GlobalAction> {
        let Some(local_action) = self.case_path.extract(action) else {
            return none();
        };

        let local_effects = self
            .key_path
            .modify(state, |local_state| self.reducer.reduce(local_state, local_action));

        local_effects
            .into_iter()
            .map(|effect| {
                let case_path = Rc::clone(&self.case_path);
                effect.map(move |local| case_path.embed(local))
            })
            .collect()
    }
}

impl<R: Clone, K: Clone, C, LocalState, LocalAction> Clone
    for Pullback<R, K, C, LocalState, LocalAction>
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            key_path: self.key_path.clone(),
            case_path: Rc::clone(&self.case_path),
            _marker: PhantomData,
        }
    }
}

impl<R, K, C, LocalState, LocalAction> std::fmt::Debug for Pullback<R, K, C, LocalState, LocalAction> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Pullback").finish_non_exhaustive()
    }
}

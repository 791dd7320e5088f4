//! Integration tests for reducer composition: `pullback`, `combine`,
//! `combine_with`, `logged` and the `combine!` macro.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use statecraft::effect::{Effect, Effects, none};
use statecraft::paths::CasePath;
use statecraft::reducer::{BoxedReducer, Reducer, ReducerExt, combine, pullback};
use statecraft::{case_path, combine, effects, key_path};

// =============================================================================
// Test domain
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct AppState {
    count: i64,
    favorites: Vec<i64>,
    history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum AppAction {
    Counter(CounterAction),
    Favorites(FavoritesAction),
}

#[derive(Debug, Clone, PartialEq)]
enum CounterAction {
    Increment,
    Decrement,
    SaveCurrent,
}

#[derive(Debug, Clone, PartialEq)]
enum FavoritesAction {
    Add(i64),
    Remove(i64),
}

fn counter(count: &mut i64, action: CounterAction) -> Effects<CounterAction> {
    match action {
        CounterAction::Increment => *count += 1,
        CounterAction::Decrement => *count -= 1,
        CounterAction::SaveCurrent => {}
    }
    none()
}

fn favorites(favorites: &mut Vec<i64>, action: FavoritesAction) -> Effects<FavoritesAction> {
    match action {
        FavoritesAction::Add(value) => {
            if !favorites.contains(&value) {
                favorites.push(value);
            }
        }
        FavoritesAction::Remove(value) => favorites.retain(|favorite| *favorite != value),
    }
    none()
}

fn history(state: &mut AppState, action: AppAction) -> Effects<AppAction> {
    state.history.push(format!("{action:?}"));
    none()
}

/// Reads the count the earlier reducers left behind and saves it.
fn save_current(state: &mut AppState, action: AppAction) -> Effects<AppAction> {
    if action == AppAction::Counter(CounterAction::SaveCurrent) {
        let current = state.count;
        effects![Effect::send(AppAction::Favorites(FavoritesAction::Add(current)))]
    } else {
        none()
    }
}

fn app_reducer() -> impl Reducer<AppState, AppAction> {
    combine(vec![
        counter
            .pullback(key_path!(AppState, count), case_path!(AppAction, Counter))
            .boxed(),
        favorites
            .pullback(key_path!(AppState, favorites), case_path!(AppAction, Favorites))
            .boxed(),
        history.boxed(),
        save_current.boxed(),
    ])
}

fn run_to_completion<S, A>(reducer: &impl Reducer<S, A>, state: &mut S, action: A) {
    let mut pending = vec![action];
    while let Some(action) = pending.pop() {
        let effects = reducer.reduce(state, action);
        pending.extend(effects.into_iter().rev().map(Effect::run));
    }
}

// =============================================================================
// pullback
// =============================================================================

#[rstest]
#[case(AppAction::Counter(CounterAction::Increment), 1, vec![])]
#[case(AppAction::Counter(CounterAction::Decrement), -1, vec![])]
#[case(AppAction::Favorites(FavoritesAction::Add(4)), 0, vec![4])]
fn test_pulled_back_reducers_touch_only_their_slice(
    #[case] action: AppAction,
    #[case] expected_count: i64,
    #[case] expected_favorites: Vec<i64>,
) {
    let reducer = app_reducer();
    let mut state = AppState::default();

    let effects = reducer.reduce(&mut state, action);

    assert!(effects.is_empty());
    assert_eq!(state.count, expected_count);
    assert_eq!(state.favorites, expected_favorites);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_pullback_maps_local_effects_into_global_actions() {
    fn echo(value: &mut i64, action: i64) -> Effects<i64> {
        *value = action;
        effects![Effect::send(action + 1), Effect::send(action + 2)]
    }

    #[derive(Debug, PartialEq)]
    enum Global {
        Echo(i64),
    }

    let reducer = pullback(echo, key_path!(AppState, count), case_path!(Global, Echo));
    let mut state = AppState::default();

    let actions: Vec<Global> = reducer
        .reduce(&mut state, Global::Echo(10))
        .into_iter()
        .map(Effect::run)
        .collect();

    assert_eq!(state.count, 10);
    assert_eq!(actions, vec![Global::Echo(11), Global::Echo(12)]);
}

#[test]
fn test_nested_pullback_through_composed_paths() {
    #[derive(Debug, Default)]
    struct Root {
        app: AppState,
    }

    #[derive(Debug, Clone)]
    enum RootAction {
        App(AppAction),
    }

    let reducer = counter.pullback(
        key_path!(Root, app.count),
        case_path!(RootAction, App).compose(case_path!(AppAction, Counter)),
    );
    let mut root = Root::default();

    reducer.reduce(&mut root, RootAction::App(AppAction::Counter(CounterAction::Increment)));
    reducer.reduce(&mut root, RootAction::App(AppAction::Favorites(FavoritesAction::Add(1))));

    assert_eq!(root.app.count, 1);
    assert!(root.app.favorites.is_empty());
}

// =============================================================================
// combine
// =============================================================================

#[test]
fn test_later_reducers_see_earlier_mutations() {
    let reducer = app_reducer();
    let mut state = AppState::default();

    run_to_completion(&reducer, &mut state, AppAction::Counter(CounterAction::Increment));
    run_to_completion(&reducer, &mut state, AppAction::Counter(CounterAction::Increment));
    run_to_completion(&reducer, &mut state, AppAction::Counter(CounterAction::SaveCurrent));

    assert_eq!(state.favorites, vec![2]);
    assert_eq!(
        state.history,
        vec![
            "Counter(Increment)",
            "Counter(Increment)",
            "Counter(SaveCurrent)",
            "Favorites(Add(2))",
        ]
    );
}

#[test]
fn test_every_reducer_runs_for_every_action() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let tracer = |tag: &'static str| {
        let calls = Rc::clone(&calls);
        BoxedReducer::new(move |_: &mut (), _: u8| -> Effects<u8> {
            calls.borrow_mut().push(tag);
            none()
        })
    };
    let reducer = combine(vec![tracer("a"), tracer("b"), tracer("c")]);

    reducer.reduce(&mut (), 0);
    reducer.reduce(&mut (), 1);

    assert_eq!(*calls.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
    assert_eq!(reducer.len(), 3);
}

#[test]
fn test_combine_macro_and_combine_with_agree() {
    fn emit(tag: u8) -> impl Fn(&mut Vec<u8>, u8) -> Effects<u8> + Clone {
        move |log: &mut Vec<u8>, _: u8| {
            log.push(tag);
            effects![Effect::send(tag)]
        }
    }

    let by_macro = combine![emit(1), emit(2), emit(3)];
    let by_method = emit(1).combine_with(emit(2)).combine_with(emit(3));

    let mut left = Vec::new();
    let mut right = Vec::new();
    let left_actions: Vec<u8> = by_macro.reduce(&mut left, 0).into_iter().map(Effect::run).collect();
    let right_actions: Vec<u8> = by_method.reduce(&mut right, 0).into_iter().map(Effect::run).collect();

    assert_eq!(left, vec![1, 2, 3]);
    assert_eq!(left, right);
    assert_eq!(left_actions, vec![1, 2, 3]);
    assert_eq!(left_actions, right_actions);
}

#[test]
fn test_logged_reducer_behaves_like_inner() {
    let plain = app_reducer();
    let logged = app_reducer().logged("app");
    let mut left = AppState::default();
    let mut right = AppState::default();

    for action in [
        AppAction::Counter(CounterAction::Increment),
        AppAction::Favorites(FavoritesAction::Add(3)),
        AppAction::Favorites(FavoritesAction::Remove(3)),
    ] {
        plain.reduce(&mut left, action.clone());
        logged.reduce(&mut right, action);
    }

    assert_eq!(left, right);
    assert_eq!(logged.label(), "app");
}

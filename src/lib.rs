//! # statecraft
//!
//! Unidirectional state management for Rust: a store owns a value,
//! dispatches actions through a reducer, and feeds the actions produced by
//! the reducer's effects back into itself.
//!
//! ## Overview
//!
//! - **Effects**: deferred computations that yield the next action
//! - **Reducers**: `(&mut State, Action) -> Effects<Action>`, lifted into
//!   larger domains with [`pullback`](reducer::pullback) and merged with
//!   [`combine`](reducer::combine)
//! - **Store**: the runtime holder of state, with synchronous depth-first
//!   effect dispatch, observers, and scoped views
//! - **Paths**: key paths into state and case paths into actions, the glue
//!   for scoping
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(KeyPaths)]` and `#[derive(CasePaths)]`
//! - `serde`: `Serialize`/`Deserialize` for [`StoreConfig`](store::StoreConfig)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use statecraft::prelude::*;
//! use statecraft::{case_path, effects, key_path};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct AppState { count: i64, fact: Option<String> }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AppAction { Counter(CounterAction), Fact(FactAction) }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum CounterAction { Increment }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum FactAction { Request(i64), Received(String) }
//!
//! fn counter(count: &mut i64, action: CounterAction) -> Effects<CounterAction> {
//!     match action {
//!         CounterAction::Increment => *count += 1,
//!     }
//!     none()
//! }
//!
//! fn fact(fact: &mut Option<String>, action: FactAction) -> Effects<FactAction> {
//!     match action {
//!         FactAction::Request(number) => {
//!             effects![Effect::new(move || FactAction::Received(format!("{number} is a number")))]
//!         }
//!         FactAction::Received(text) => {
//!             *fact = Some(text);
//!             none()
//!         }
//!     }
//! }
//!
//! let app = combine(vec![
//!     counter.pullback(key_path!(AppState, count), case_path!(AppAction, Counter)).boxed(),
//!     fact.pullback(key_path!(AppState, fact), case_path!(AppAction, Fact)).boxed(),
//! ]);
//!
//! let store = Store::new(AppState::default(), app);
//! let counter_view = store.view(|state: &AppState| state.count, case_path!(AppAction, Counter));
//!
//! counter_view.send(CounterAction::Increment);
//! store.send(AppAction::Fact(FactAction::Request(1)));
//!
//! assert_eq!(counter_view.state(), 1);
//! assert_eq!(store.state().fact.as_deref(), Some("1 is a number"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use statecraft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::effect::{Effect, Effects, none};
    pub use crate::error::DispatchError;
    pub use crate::paths::{CasePath, KeyPath};
    pub use crate::reducer::{BoxedReducer, Reducer, ReducerExt, combine, pullback};
    pub use crate::store::{Store, StoreConfig, Subscription};

    #[cfg(feature = "derive")]
    pub use statecraft_derive::{CasePaths, KeyPaths};
}

pub mod effect;
pub mod error;
pub mod paths;
pub mod reducer;
pub mod store;

#[cfg(feature = "derive")]
pub use statecraft_derive::{CasePaths, KeyPaths};

#[doc(hidden)]
pub use smallvec;

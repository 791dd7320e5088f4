//! Paths into state and actions.
//!
//! Reducers and stores are scoped with two kinds of path:
//!
//! - [`KeyPath`]: a writable location inside a state struct (get / get-mut)
//! - [`CasePath`]: one case of a wider action enum (embed / extract)
//!
//! Both compose, and both can be generated: with the [`key_path!`](crate::key_path)
//! and [`case_path!`](crate::case_path) macros, or with the `KeyPaths` and
//! `CasePaths` derives (feature `derive`).
//!
//! # Example
//!
//! ```
//! use statecraft::paths::{CasePath, KeyPath};
//! use statecraft::{case_path, key_path};
//!
//! struct AppState { count: i64 }
//!
//! #[derive(Debug, PartialEq)]
//! enum AppAction { Counter(CounterAction) }
//!
//! #[derive(Debug, PartialEq)]
//! enum CounterAction { Increment }
//!
//! let count = key_path!(AppState, count);
//! let counter = case_path!(AppAction, Counter);
//!
//! let mut state = AppState { count: 0 };
//! if let Some(CounterAction::Increment) = counter.extract(AppAction::Counter(CounterAction::Increment)) {
//!     *count.get_mut(&mut state) += 1;
//! }
//! assert_eq!(state.count, 1);
//! ```

mod case_path;
mod key_path;

pub use case_path::CasePath;
pub use case_path::ComposedCasePath;
pub use case_path::FunctionCasePath;
pub use case_path::IdentityCasePath;

pub use key_path::ComposedKeyPath;
pub use key_path::FunctionKeyPath;
pub use key_path::IdentityKeyPath;
pub use key_path::KeyPath;

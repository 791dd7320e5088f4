//! Derive macros for statecraft key paths and case paths.
//!
//! This crate provides procedural macros that generate the path values
//! `statecraft` uses to scope reducers and stores:
//!
//! - [`KeyPaths`]: one writable key path per struct field
//! - [`CasePaths`]: one case path per enum variant
//!
//! # Example: Key Paths
//!
//! ```rust,ignore
//! use statecraft::paths::KeyPath;
//! use statecraft_derive::KeyPaths;
//!
//! #[derive(KeyPaths)]
//! struct AppState {
//!     count: i64,
//!     favorites: Vec<i64>,
//! }
//!
//! // Generated methods:
//! // - AppState::count_key_path() -> impl KeyPath<AppState, i64>
//! // - AppState::favorites_key_path() -> impl KeyPath<AppState, Vec<i64>>
//!
//! let mut state = AppState { count: 1, favorites: vec![] };
//! *AppState::count_key_path().get_mut(&mut state) += 1;
//! assert_eq!(state.count, 2);
//! ```
//!
//! # Example: Case Paths
//!
//! ```rust,ignore
//! use statecraft::paths::CasePath;
//! use statecraft_derive::CasePaths;
//!
//! #[derive(CasePaths)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     Reset,
//! }
//!
//! // Generated methods:
//! // - AppAction::counter_case() -> impl CasePath<AppAction, CounterAction>
//! // - AppAction::reset_case() -> impl CasePath<AppAction, ()>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod case_paths;
mod key_paths;

use proc_macro::TokenStream;

/// Derive macro for generating writable key paths for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_key_path() -> impl KeyPath<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields (no tuple or unit structs)
///
/// # Example
///
/// ```rust,ignore
/// use statecraft::paths::KeyPath;
/// use statecraft_derive::KeyPaths;
///
/// #[derive(KeyPaths)]
/// struct Settings {
///     volume: u8,
/// }
///
/// let settings = Settings { volume: 3 };
/// assert_eq!(*Settings::volume_key_path().get(&settings), 3);
/// ```
///
/// Generic structs are supported; call the method on the concrete type,
/// e.g. `Wrapper::<i32>::inner_key_path()`.
#[proc_macro_derive(KeyPaths)]
pub fn derive_key_paths(input: TokenStream) -> TokenStream {
    key_paths::derive_key_paths_impl(input)
}

/// Derive macro for generating case paths for enum variants.
///
/// Each variant gets a method named `{variant_name_snake_case}_case()`.
///
/// # Variant Payloads
///
/// - **Unit variants** (e.g., `Reset`): `impl CasePath<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Counter(CounterAction)`): `impl CasePath<Enum, CounterAction>`
/// - **Multi-field tuple variants** (e.g., `Moved(i32, i32)`): `impl CasePath<Enum, (i32, i32)>`
/// - **Struct variants** (e.g., `Resized { width: u32, height: u32 }`): `impl CasePath<Enum, (u32, u32)>`,
///   fields in declaration order
///
/// # Example
///
/// ```rust,ignore
/// use statecraft::paths::CasePath;
/// use statecraft_derive::CasePaths;
///
/// #[derive(Debug, PartialEq, CasePaths)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     Closed,
/// }
///
/// let click = Event::click_case();
/// assert_eq!(click.extract(Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(click.extract(Event::Closed), None);
/// assert_eq!(click.embed((3, 4)), Event::Click { x: 3, y: 4 });
/// ```
#[proc_macro_derive(CasePaths)]
pub fn derive_case_paths(input: TokenStream) -> TokenStream {
    case_paths::derive_case_paths_impl(input)
}

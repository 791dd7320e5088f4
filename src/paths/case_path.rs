//! Case paths between a wide action type and one of its cases.
//!
//! A case path pairs a total, injective `embed` (narrow value into the wide
//! type) with its partial inverse `extract`. It is the action-side dual of a
//! [`KeyPath`](super::KeyPath): scoped stores embed their local actions into
//! the parent's action type, and pulled-back reducers extract the local action
//! from a global one, skipping actions that belong to other cases.
//!
//! # Laws
//!
//! 1. **EmbedExtract Law**: extracting an embedded value yields it back.
//!    ```text
//!    path.extract(path.embed(value)) == Some(value)
//!    ```
//!
//! 2. **ExtractEmbed Law**: if extraction succeeds, embedding the result
//!    rebuilds the original.
//!    ```text
//!    path.extract(root.clone()).map(|value| path.embed(value)) == Some(root)  // when Some
//!    ```
//!
//! # Examples
//!
//! ```
//! use statecraft::paths::CasePath;
//! use statecraft::case_path;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     Reset,
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum CounterAction { Increment }
//!
//! let counter = case_path!(AppAction, Counter);
//!
//! assert_eq!(counter.embed(CounterAction::Increment), AppAction::Counter(CounterAction::Increment));
//! assert_eq!(counter.extract(AppAction::Counter(CounterAction::Increment)), Some(CounterAction::Increment));
//! assert_eq!(counter.extract(AppAction::Reset), None);
//! ```

use std::marker::PhantomData;

/// An embed/extract pair connecting a narrow `Value` to a wide `Root`.
pub trait CasePath<Root, Value> {
    /// Pulls the narrow value out of `root`, or returns `None` when `root`
    /// belongs to a different case.
    fn extract(&self, root: Root) -> Option<Value>;

    /// Wraps a narrow value into the wide type.
    fn embed(&self, value: Value) -> Root;

    /// Reports whether `root` belongs to this case without consuming it.
    fn matches(&self, root: &Root) -> bool
    where
        Root: Clone,
    {
        self.extract(root.clone()).is_some()
    }

    /// Extends this path with a path into a nested case.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft::paths::CasePath;
    /// use statecraft::case_path;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppAction { Settings(SettingsAction) }
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum SettingsAction { VolumeChanged(u8) }
    ///
    /// let volume = case_path!(AppAction, Settings).compose(case_path!(SettingsAction, VolumeChanged));
    ///
    /// assert_eq!(
    ///     volume.embed(3),
    ///     AppAction::Settings(SettingsAction::VolumeChanged(3))
    /// );
    /// ```
    fn compose<Inner, P>(self, other: P) -> ComposedCasePath<Self, P, Value>
    where
        Self: Sized,
        P: CasePath<Value, Inner>,
    {
        ComposedCasePath::new(self, other)
    }
}

/// A case path built from an extracting function and an embedding function.
///
/// This is what the [`case_path!`](crate::case_path) macro and the
/// `CasePaths` derive produce.
pub struct FunctionCasePath<Root, Value, X, E>
where
    X: Fn(Root) -> Option<Value>,
    E: Fn(Value) -> Root,
{
    extract: X,
    embed: E,
    _marker: PhantomData<fn(Root) -> Value>,
}

impl<Root, Value, X, E> FunctionCasePath<Root, Value, X, E>
where
    X: Fn(Root) -> Option<Value>,
    E: Fn(Value) -> Root,
{
    /// Creates a case path from its two halves.
    ///
    /// `embed` must be injective and `extract` must return `None` for every
    /// root that `embed` cannot produce.
    #[must_use]
    pub const fn new(extract: X, embed: E) -> Self {
        Self {
            extract,
            embed,
            _marker: PhantomData,
        }
    }
}

impl<Root, Value, X, E> CasePath<Root, Value> for FunctionCasePath<Root, Value, X, E>
where
    X: Fn(Root) -> Option<Value>,
    E: Fn(Value) -> Root,
{
    fn extract(&self, root: Root) -> Option<Value> {
        (self.extract)(root)
    }

    fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }
}

impl<Root, Value, X, E> Clone for FunctionCasePath<Root, Value, X, E>
where
    X: Fn(Root) -> Option<Value> + Clone,
    E: Fn(Value) -> Root + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.extract.clone(), self.embed.clone())
    }
}

impl<Root, Value, X, E> std::fmt::Debug for FunctionCasePath<Root, Value, X, E>
where
    X: Fn(Root) -> Option<Value>,
    E: Fn(Value) -> Root,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionCasePath")
            .finish_non_exhaustive()
    }
}

/// Two case paths joined end to end.
pub struct ComposedCasePath<P1, P2, Middle> {
    outer: P1,
    inner: P2,
    _marker: PhantomData<fn() -> Middle>,
}

impl<P1, P2, Middle> ComposedCasePath<P1, P2, Middle> {
    /// Joins `outer` and `inner`.
    #[must_use]
    pub const fn new(outer: P1, inner: P2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<Root, Middle, Value, P1, P2> CasePath<Root, Value> for ComposedCasePath<P1, P2, Middle>
where
    P1: CasePath<Root, Middle>,
    P2: CasePath<Middle, Value>,
{
    fn extract(&self, root: Root) -> Option<Value> {
        self.outer
            .extract(root)
            .and_then(|middle| self.inner.extract(middle))
    }

    fn embed(&self, value: Value) -> Root {
        self.outer.embed(self.inner.embed(value))
    }
}

impl<P1: Clone, P2: Clone, Middle> Clone for ComposedCasePath<P1, P2, Middle> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, Middle> std::fmt::Debug
    for ComposedCasePath<P1, P2, Middle>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedCasePath")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The case path whose single case is the whole type.
///
/// Used to scope a store's state while keeping its action type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCasePath;

impl<Root> CasePath<Root, Root> for IdentityCasePath {
    fn extract(&self, root: Root) -> Option<Root> {
        Some(root)
    }

    fn embed(&self, value: Root) -> Root {
        value
    }
}

/// Creates a case path to a single-field tuple variant.
///
/// # Syntax
///
/// ```text
/// case_path!(EnumType, Variant)
/// case_path!(EnumType<Generic>, Variant)
/// ```
///
/// For unit, multi-field and struct variants use `#[derive(CasePaths)]`.
#[macro_export]
macro_rules! case_path {
    ($enum_type:ident, $variant:ident) => {
        $crate::paths::FunctionCasePath::new(
            |root: $enum_type| match root {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::paths::FunctionCasePath::new(
            |root: $enum_type<$($generic),+>| match root {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::paths::FunctionCasePath::new(
            |root: $enum_type| match root {
                <$enum_type>::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Inner(Inner),
        Other(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Inner {
        Value(i32),
        Empty(()),
    }

    #[test]
    fn test_function_case_path_extract_match() {
        let inner = case_path!(Outer, Inner);
        assert_eq!(
            inner.extract(Outer::Inner(Inner::Value(1))),
            Some(Inner::Value(1))
        );
    }

    #[test]
    fn test_function_case_path_extract_miss() {
        let inner = case_path!(Outer, Inner);
        assert_eq!(inner.extract(Outer::Other("x".to_string())), None);
    }

    #[test]
    fn test_case_path_matches() {
        let other = case_path!(Outer, Other);
        assert!(other.matches(&Outer::Other(String::new())));
        assert!(!other.matches(&Outer::Inner(Inner::Empty(()))));
    }

    #[test]
    fn test_case_path_compose() {
        let value = case_path!(Outer, Inner).compose(case_path!(Inner, Value));

        assert_eq!(value.embed(5), Outer::Inner(Inner::Value(5)));
        assert_eq!(value.extract(Outer::Inner(Inner::Value(5))), Some(5));
        assert_eq!(value.extract(Outer::Inner(Inner::Empty(()))), None);
        assert_eq!(value.extract(Outer::Other(String::new())), None);
    }

    #[test]
    fn test_identity_case_path() {
        let root = Outer::Other("same".to_string());
        assert_eq!(IdentityCasePath.extract(root.clone()), Some(root.clone()));
        assert_eq!(IdentityCasePath.embed(root.clone()), root);
    }
}

//! Writable key paths into nested state.
//!
//! A key path names a location inside a larger structure and gives both
//! shared and exclusive access to it. Reducers lifted with
//! [`pullback`](crate::reducer::pullback) mutate their slice of the global
//! state in place through a key path.
//!
//! # Laws
//!
//! Every key path must satisfy:
//!
//! 1. **GetMutGet Law**: A write through `get_mut` is observed by `get`.
//!    ```text
//!    *path.get_mut(&mut root) = value; path.get(&root) == &value
//!    ```
//!
//! 2. **Locality Law**: A write through `get_mut` leaves every location outside
//!    the focused value unchanged.
//!
//! # Examples
//!
//! ```
//! use statecraft::paths::KeyPath;
//! use statecraft::key_path;
//!
//! struct AppState { count: i64, user: User }
//! struct User { name: String }
//!
//! let mut state = AppState { count: 0, user: User { name: "Blob".to_string() } };
//!
//! let count = key_path!(AppState, count);
//! *count.get_mut(&mut state) += 1;
//! assert_eq!(*count.get(&state), 1);
//!
//! let name = key_path!(AppState, user.name);
//! name.modify(&mut state, |name| name.push_str(" Jr."));
//! assert_eq!(state.user.name, "Blob Jr.");
//! ```

use std::marker::PhantomData;

/// A writable path from a `Root` value to one of its parts.
///
/// # Type Parameters
///
/// - `Root`: The type containing the focused value
/// - `Value`: The focused value
pub trait KeyPath<Root, Value> {
    /// Returns a shared reference to the focused value.
    fn get<'a>(&self, root: &'a Root) -> &'a Value;

    /// Returns an exclusive reference to the focused value.
    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value;

    /// Runs `function` on the focused value in place and returns its result.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft::paths::KeyPath;
    /// use statecraft::key_path;
    ///
    /// struct Counter { count: i64 }
    ///
    /// let mut counter = Counter { count: 41 };
    /// let previous = key_path!(Counter, count).modify(&mut counter, |count| {
    ///     let previous = *count;
    ///     *count += 1;
    ///     previous
    /// });
    /// assert_eq!(previous, 41);
    /// assert_eq!(counter.count, 42);
    /// ```
    fn modify<R, F>(&self, root: &mut Root, function: F) -> R
    where
        F: FnOnce(&mut Value) -> R,
    {
        function(self.get_mut(root))
    }

    /// Replaces the focused value, returning the previous one.
    fn replace(&self, root: &mut Root, value: Value) -> Value {
        std::mem::replace(self.get_mut(root), value)
    }

    /// Extends this path with a path into the focused value.
    fn compose<Inner, P>(self, other: P) -> ComposedKeyPath<Self, P, Value>
    where
        Self: Sized,
        P: KeyPath<Value, Inner>,
    {
        ComposedKeyPath::new(self, other)
    }
}

/// A key path built from a getter and a mutable getter.
///
/// This is what the [`key_path!`](crate::key_path) macro and the
/// `KeyPaths` derive produce.
///
/// # Example
///
/// ```
/// use statecraft::paths::{FunctionKeyPath, KeyPath};
///
/// struct Point { x: i32, y: i32 }
///
/// let x = FunctionKeyPath::new(|point: &Point| &point.x, |point: &mut Point| &mut point.x);
///
/// let mut point = Point { x: 1, y: 2 };
/// *x.get_mut(&mut point) = 10;
/// assert_eq!(point.x, 10);
/// assert_eq!(point.y, 2);
/// ```
pub struct FunctionKeyPath<Root, Value, G, M>
where
    G: Fn(&Root) -> &Value,
    M: Fn(&mut Root) -> &mut Value,
{
    getter: G,
    getter_mut: M,
    _marker: PhantomData<fn(Root) -> Value>,
}

impl<Root, Value, G, M> FunctionKeyPath<Root, Value, G, M>
where
    G: Fn(&Root) -> &Value,
    M: Fn(&mut Root) -> &mut Value,
{
    /// Creates a key path from a getter and a mutable getter.
    ///
    /// Both functions must focus on the same location.
    #[must_use]
    pub const fn new(getter: G, getter_mut: M) -> Self {
        Self {
            getter,
            getter_mut,
            _marker: PhantomData,
        }
    }
}

impl<Root, Value, G, M> KeyPath<Root, Value> for FunctionKeyPath<Root, Value, G, M>
where
    G: Fn(&Root) -> &Value,
    M: Fn(&mut Root) -> &mut Value,
{
    fn get<'a>(&self, root: &'a Root) -> &'a Value {
        (self.getter)(root)
    }

    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        (self.getter_mut)(root)
    }
}

impl<Root, Value, G, M> Clone for FunctionKeyPath<Root, Value, G, M>
where
    G: Fn(&Root) -> &Value + Clone,
    M: Fn(&mut Root) -> &mut Value + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            getter_mut: self.getter_mut.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Root, Value, G, M> std::fmt::Debug for FunctionKeyPath<Root, Value, G, M>
where
    G: Fn(&Root) -> &Value,
    M: Fn(&mut Root) -> &mut Value,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionKeyPath")
            .finish_non_exhaustive()
    }
}

/// Two key paths joined end to end.
///
/// `Middle` is the value focused by the outer path and the root of the inner
/// one. It must be `'static` for the composed path to be a [`KeyPath`].
pub struct ComposedKeyPath<P1, P2, Middle> {
    outer: P1,
    inner: P2,
    _marker: PhantomData<fn() -> Middle>,
}

impl<P1, P2, Middle> ComposedKeyPath<P1, P2, Middle> {
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

impl<Root, Middle, Value, P1, P2> KeyPath<Root, Value> for ComposedKeyPath<P1, P2, Middle>
where
    Middle: 'static,
    P1: KeyPath<Root, Middle>,
    P2: KeyPath<Middle, Value>,
{
    fn get<'a>(&self, root: &'a Root) -> &'a Value {
        self.inner.get(self.outer.get(root))
    }

    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        self.inner.get_mut(self.outer.get_mut(root))
    }
}

impl<P1: Clone, P2: Clone, Middle> Clone for ComposedKeyPath<P1, P2, Middle> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, Middle> std::fmt::Debug
    for ComposedKeyPath<P1, P2, Middle>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedKeyPath")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The key path that focuses on the whole root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityKeyPath;

impl<Root> KeyPath<Root, Root> for IdentityKeyPath {
    fn get<'a>(&self, root: &'a Root) -> &'a Root {
        root
    }

    fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Root {
        root
    }
}

/// Creates a key path to a (possibly nested) struct field.
///
/// # Syntax
///
/// ```text
/// key_path!(Type, field)
/// key_path!(Type, field.nested.deeper)
/// ```
///
/// # Example
///
/// ```
/// use statecraft::paths::KeyPath;
/// use statecraft::key_path;
///
/// struct Settings { audio: Audio }
/// struct Audio { volume: u8 }
///
/// let mut settings = Settings { audio: Audio { volume: 3 } };
/// *key_path!(Settings, audio.volume).get_mut(&mut settings) = 7;
/// assert_eq!(settings.audio.volume, 7);
/// ```
#[macro_export]
macro_rules! key_path {
    ($root_type:ident < $($generic:tt),+ >, $($field:tt).+) => {
        $crate::paths::FunctionKeyPath::new(
            |root: &$root_type<$($generic),+>| &root.$($field).+,
            |root: &mut $root_type<$($generic),+>| &mut root.$($field).+,
        )
    };
    ($root_type:path, $($field:tt).+) => {
        $crate::paths::FunctionKeyPath::new(
            |root: &$root_type| &root.$($field).+,
            |root: &mut $root_type| &mut root.$($field).+,
        )
    };
}

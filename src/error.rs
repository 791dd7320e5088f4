//! Errors reported by [`Store::try_send`](crate::store::Store::try_send).
//!
//! Dispatch itself has no failure mode: a pulled-back reducer that ignores an
//! action is the normal path, and failures inside application reducers or
//! effects propagate untouched. These errors only describe actions the store
//! refused to dispatch.

use thiserror::Error;

/// Why a store did not dispatch an action.
///
/// # Examples
///
/// ```rust
/// use statecraft::error::DispatchError;
///
/// let error = DispatchError::DepthExceeded { store: "app".to_string(), limit: 8 };
/// assert_eq!(
///     error.to_string(),
///     "store `app` exceeded the maximum dispatch depth of 8"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A reducer or observer sent an action to the store it was running on
    /// while that store's state was borrowed.
    #[error("store `{store}` received an action while its state was borrowed")]
    Reentrant {
        /// Label of the store.
        store: String,
    },

    /// An effect chain nested deeper than the configured maximum.
    #[error("store `{store}` exceeded the maximum dispatch depth of {limit}")]
    DepthExceeded {
        /// Label of the store.
        store: String,
        /// The configured maximum depth.
        limit: usize,
    },
}

impl DispatchError {
    /// Returns the label of the store that refused the action.
    pub fn store(&self) -> &str {
        match self {
            Self::Reentrant { store } | Self::DepthExceeded { store, .. } => store,
        }
    }
}

//! Store configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const UNLABELLED: &str = "store";

/// Per-store settings.
///
/// The default is an unlabelled store with unbounded effect recursion: an
/// effect chain that never terminates overflows the stack.
///
/// # Example
///
/// ```
/// use statecraft::store::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_label("app")
///     .with_max_dispatch_depth(64);
///
/// assert_eq!(config.label(), "app");
/// assert_eq!(config.max_dispatch_depth(), Some(64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreConfig {
    label: Option<String>,
    max_dispatch_depth: Option<usize>,
}

impl StoreConfig {
    /// Names the store in log events and errors.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Caps how deeply effect-produced actions may nest.
    ///
    /// Actions sent from outside run at depth 0; an action produced by an
    /// effect of a depth `d` action runs at depth `d + 1`. Actions deeper
    /// than `depth` are not dispatched.
    #[must_use]
    pub const fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = Some(depth);
        self
    }

    /// Returns the store label, or `"store"` when none was set.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(UNLABELLED)
    }

    /// Returns the configured maximum dispatch depth.
    pub const fn max_dispatch_depth(&self) -> Option<usize> {
        self.max_dispatch_depth
    }

    /// Derives the configuration of a store scoped from one with this
    /// configuration: same depth cap, label suffixed with `/view`.
    pub(crate) fn scoped(&self) -> Self {
        Self {
            label: Some(format!("{}/view", self.label())),
            max_dispatch_depth: self.max_dispatch_depth,
        }
    }
}

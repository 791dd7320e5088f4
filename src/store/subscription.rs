//! Observer registry and the subscription handles it hands out.
//!
//! The registry owns the observer callbacks; a [`Subscription`] only holds a
//! weak reference back to it. Dropping the store drops the registry, and
//! dropping a subscription removes its callback, so neither side keeps the
//! other alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub(crate) type Observer<State> = Rc<dyn Fn(&State)>;

/// Callbacks registered on one store, in subscription order.
pub(crate) struct Observers<State> {
    next_id: u64,
    entries: Vec<(u64, Observer<State>)>,
}

impl<State> Observers<State> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, observer: Observer<State>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Clones the current callbacks so they can run without holding the
    /// registry borrow; observers may subscribe or unsubscribe while notified.
    pub(crate) fn snapshot(&self) -> Vec<(u64, Observer<State>)> {
        self.entries
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect()
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Type-erased removal, so a [`Subscription`] does not carry the state type.
pub(crate) trait Detach {
    fn detach(&self, id: u64) -> bool;

    fn contains(&self, id: u64) -> bool;
}

impl<State> Detach for RefCell<Observers<State>> {
    fn detach(&self, id: u64) -> bool {
        let Ok(mut observers) = self.try_borrow_mut() else {
            return false;
        };
        let before = observers.entries.len();
        observers.entries.retain(|(entry_id, _)| *entry_id != id);
        observers.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.try_borrow().is_ok_and(|observers| observers.contains(id))
    }
}

/// A live registration of an observer on a store.
///
/// The observer stays registered for as long as this handle exists; dropping
/// it unsubscribes.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use statecraft::effect::{none, Effects};
/// use statecraft::store::Store;
///
/// fn add(count: &mut i32, delta: i32) -> Effects<i32> {
///     *count += delta;
///     none()
/// }
///
/// let store = Store::new(0, add);
/// let seen = Rc::new(Cell::new(0));
///
/// let observed = Rc::clone(&seen);
/// let subscription = store.subscribe(move |count: &i32| observed.set(*count));
///
/// store.send(5);
/// assert_eq!(seen.get(), 5);
///
/// drop(subscription);
/// store.send(5);
/// assert_eq!(seen.get(), 5);
/// ```
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    registry: Weak<dyn Detach>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new<State: 'static>(registry: &Rc<RefCell<Observers<State>>>, id: u64) -> Self {
        let registry: Rc<dyn Detach> = Rc::clone(registry) as Rc<dyn Detach>;
        Self {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// Returns `true` while the store is alive and the observer registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && registry.detach(self.id)
        {
            tracing::trace!(subscription = self.id, "observer unsubscribed");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

//! Scoped resize listeners.
//!
//! A front end registers one listener per mounted visualization and must
//! release it on teardown. [`ResizeWatch`] is that registration: it is
//! released when dropped, so a listener cannot outlive the view that owns it.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::render::container_width_from_client;

type Listener = Box<dyn FnMut(u32)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    by_id: BTreeMap<u64, Listener>,
    /// Listeners taken out by a running `notify`, if any.
    in_flight: Option<usize>,
    /// In-flight listeners whose watch was dropped during `notify`.
    dropped: BTreeSet<u64>,
}

/// Source of resize notifications. Single-threaded, like the UI it serves.
#[derive(Clone, Default)]
pub struct ResizeRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for ResizeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeRegistry {
    /// Create a registry with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it receives the usable container width on every
    /// notification until the returned watch is dropped.
    #[must_use = "dropping the watch deregisters the listener immediately"]
    pub fn watch(&self, listener: impl FnMut(u32) + 'static) -> ResizeWatch {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.by_id.insert(id, Box::new(listener));
        tracing::trace!(id, "Resize listener registered");
        ResizeWatch {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver a new client width to every live listener.
    ///
    /// Listeners receive the width minus the container padding. A listener
    /// may register or drop watches while it runs: a dropped listener is not
    /// called again, and one registered during delivery first hears the next
    /// notification. A `notify` issued from inside a listener is ignored.
    pub fn notify(&self, client_width: u32) {
        let width = container_width_from_client(client_width);

        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.in_flight.is_some() {
                tracing::trace!(client_width, "Nested resize notification ignored");
                return;
            }
            let taken = std::mem::take(&mut inner.by_id);
            inner.in_flight = Some(taken.len());
            taken
        };

        for (id, listener) in &mut listeners {
            if self.inner.borrow().dropped.contains(id) {
                continue;
            }
            listener(width);
        }

        let mut inner = self.inner.borrow_mut();
        for id in std::mem::take(&mut inner.dropped) {
            listeners.remove(&id);
        }
        listeners.append(&mut inner.by_id);
        inner.by_id = listeners;
        inner.in_flight = None;
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.by_id.len() + inner.in_flight.unwrap_or(0) - inner.dropped.len()
    }
}

/// Registration of one resize listener; deregisters on drop.
#[derive(Debug)]
pub struct ResizeWatch {
    registry: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut inner = inner.borrow_mut();
            if inner.by_id.remove(&self.id).is_none() && inner.in_flight.is_some() {
                inner.dropped.insert(self.id);
            }
            tracing::trace!(id = self.id, "Resize listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listener_receives_padded_width() {
        let registry = ResizeRegistry::new();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _watch = registry.watch(move |w| sink.set(w));

        registry.notify(864);
        assert_eq!(seen.get(), 800);
    }

    #[test]
    fn test_drop_deregisters() {
        let registry = ResizeRegistry::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let watch = registry.watch(move |_| counter.set(counter.get() + 1));
        assert_eq!(registry.listener_count(), 1);

        registry.notify(500);
        drop(watch);
        registry.notify(500);

        assert_eq!(calls.get(), 1);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_drop_another_watch() {
        let registry = ResizeRegistry::new();
        let calls = Rc::new(Cell::new(0));

        let victim_calls = Rc::clone(&calls);
        let victim = registry.watch(move |_| victim_calls.set(victim_calls.get() + 1));
        let slot = Rc::new(RefCell::new(Some(victim)));

        // registered second, so it runs after the victim on the first pass
        let held = Rc::clone(&slot);
        let _teardown = registry.watch(move |_| drop(held.borrow_mut().take()));

        registry.notify(900);
        assert_eq!(calls.get(), 1);
        assert_eq!(registry.listener_count(), 1);

        registry.notify(900);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dropped_listener_is_skipped_in_same_pass() {
        let registry = ResizeRegistry::new();
        let later_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ResizeWatch>>> = Rc::new(RefCell::new(None));

        let held = Rc::clone(&slot);
        let _first = registry.watch(move |_| drop(held.borrow_mut().take()));
        let counter = Rc::clone(&later_calls);
        *slot.borrow_mut() = Some(registry.watch(move |_| counter.set(counter.get() + 1)));

        registry.notify(900);
        assert_eq!(later_calls.get(), 0);
        assert_eq!(registry.listener_count(), 1);
    }

    #[test]
    fn test_listener_may_query_and_register() {
        let registry = ResizeRegistry::new();
        let seen = Rc::new(Cell::new(0));
        let added: Rc<RefCell<Vec<ResizeWatch>>> = Rc::new(RefCell::new(Vec::new()));

        let inner_registry = registry.clone();
        let sink = Rc::clone(&seen);
        let store = Rc::clone(&added);
        let _watch = registry.watch(move |_| {
            sink.set(inner_registry.listener_count());
            store.borrow_mut().push(inner_registry.watch(|_| {}));
        });

        registry.notify(500);
        assert_eq!(seen.get(), 1);
        assert_eq!(registry.listener_count(), 2);
    }

    #[test]
    fn test_watch_outliving_registry_is_harmless() {
        let registry = ResizeRegistry::new();
        let watch = registry.watch(|_| {});
        drop(registry);
        drop(watch);
    }
}

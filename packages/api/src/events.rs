//! # Session-expired notifications
//!
//! [`SessionEvents`] is a small listener registry shared between the
//! [`crate::ApiClient`] (the only publisher) and whoever needs to react when the
//! server rejects the current session, typically a layout that redirects to
//! `/login?reason=session_expired` and the auth provider that flips to logged out.
//!
//! Clones share one registry. Listeners are called synchronously, in
//! registration order, on the thread that received the response.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

/// Handle returned by [`SessionEvents::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Registry of callbacks fired when the session expires.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Rc<RefCell<Registry>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and return its id.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(existing, _)| *existing != id);
        registry.listeners.len() != before
    }

    /// Call every registered listener.
    pub fn notify(&self) {
        // Snapshot so listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        tracing::debug!("Notifying {} session-expired listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for SessionEvents {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEvents")
            .field("listeners", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn notify_calls_every_listener() {
        let events = SessionEvents::new();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            events.subscribe(move || hits.set(hits.get() + 1));
        }

        events.notify();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let events = SessionEvents::new();
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = Rc::clone(&hits);
            events.subscribe(move || hits.set(hits.get() + 1))
        };

        assert!(events.unsubscribe(id));
        assert!(!events.unsubscribe(id));
        events.notify();
        assert_eq!(hits.get(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn clones_share_registry() {
        let events = SessionEvents::new();
        let publisher = events.clone();
        let fired = Rc::new(Cell::new(false));
        {
            let fired = Rc::clone(&fired);
            events.subscribe(move || fired.set(true));
        }

        publisher.notify();
        assert!(fired.get());
        assert_eq!(publisher, events);
        assert_ne!(publisher, SessionEvents::new());
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let events = SessionEvents::new();
        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let id = {
            let events = events.clone();
            let slot = Rc::clone(&slot);
            events.clone().subscribe(move || {
                if let Some(id) = slot.get() {
                    events.unsubscribe(id);
                }
            })
        };
        slot.set(Some(id));

        events.notify();
        assert!(events.is_empty());
    }
}

//! Listener registry.
//!
//! The registry keeps weak handles to listeners owned by the host. Events are
//! delivered synchronously in subscription order; listeners whose owner has
//! dropped them are skipped and pruned.
//!
//! A listener that panics is not isolated: the panic unwinds out of the
//! engine call that fired the event, and later listeners are not notified.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use super::event::{GameEvent, ModelListener};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Ordered list of subscribed listeners.
///
/// ## Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use sanguine::core::Player;
/// use sanguine::triggers::{EventLog, GameEvent, ListenerRegistry};
///
/// let log = Rc::new(RefCell::new(EventLog::new()));
/// let mut registry = ListenerRegistry::new();
/// registry.subscribe_rc(&log);
///
/// registry.notify(&GameEvent::TurnSwitch(Player::Blue));
/// assert_eq!(log.borrow().events, vec![GameEvent::TurnSwitch(Player::Blue)]);
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Weak<RefCell<dyn ModelListener>>)>,
    next_id: u32,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener. The registry does not keep it alive.
    pub fn subscribe(&mut self, listener: Weak<RefCell<dyn ModelListener>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Subscribe a listener held in an `Rc`.
    pub fn subscribe_rc<L: ModelListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId {
        let rc: Rc<RefCell<dyn ModelListener>> = listener.clone();
        self.subscribe(Rc::downgrade(&rc))
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Number of listeners still alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.iter().filter(|(_, l)| l.strong_count() > 0).count()
    }

    /// Check whether no live listener is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every live listener in subscription order.
    pub fn notify(&mut self, event: &GameEvent) {
        self.listeners.retain(|(_, l)| l.strong_count() > 0);
        for (id, listener) in &self.listeners {
            if let Some(listener) = listener.upgrade() {
                log::trace!("notifying {} of {:?}", id, event);
                listener.borrow_mut().on_event(event);
            }
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

//! Notification fan-out.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: Turn switch or game over
//! - [`ModelListener`]: Observer callbacks
//! - [`ListenerRegistry`]: Weak handles, notified in subscription order
//! - [`EventLog`]: Listener that records what it hears
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use sanguine::core::Player;
//! use sanguine::triggers::{EventLog, GameEvent, ListenerRegistry};
//!
//! let log = Rc::new(RefCell::new(EventLog::new()));
//! let mut registry = ListenerRegistry::new();
//! let id = registry.subscribe_rc(&log);
//!
//! registry.notify(&GameEvent::TurnSwitch(Player::Red));
//! registry.unsubscribe(id);
//! registry.notify(&GameEvent::GameOver);
//!
//! assert_eq!(log.borrow().events, vec![GameEvent::TurnSwitch(Player::Red)]);
//! ```

mod event;
mod registry;

pub use event::{EventLog, GameEvent, ModelListener};
pub use registry::{ListenerId, ListenerRegistry};

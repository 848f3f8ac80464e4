//! Listener notification tests.
//!
//! Listeners are owned by the host and held weakly by the engine. Events are
//! delivered synchronously in subscription order.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use sanguine::cards::{CardEntry, InfluenceGrid};
use sanguine::core::Player;
use sanguine::rules::SanguineModel;
use sanguine::triggers::{EventLog, GameEvent, ModelListener};

fn model() -> SanguineModel {
    let deck = |owner| -> Vec<CardEntry> {
        (0..15)
            .map(|i| CardEntry::new(format!("C{}", i), 1, 1, owner, InfluenceGrid::empty()))
            .collect()
    };
    let mut model = SanguineModel::new(3, 5).unwrap();
    model.configure(3, deck(Player::Red), deck(Player::Blue), false).unwrap();
    model
}

fn subscribe<L: ModelListener + 'static>(model: &mut SanguineModel, listener: &Rc<RefCell<L>>) {
    let listener: Rc<RefCell<dyn ModelListener>> = listener.clone();
    model.subscribe(Rc::downgrade(&listener));
}

/// Appends its tag to a shared journal on every event.
struct Journal {
    tag: char,
    entries: Rc<RefCell<String>>,
}

impl ModelListener for Journal {
    fn on_turn_switch(&mut self, _player: Player) {
        self.entries.borrow_mut().push(self.tag);
    }

    fn on_game_over(&mut self) {
        self.entries.borrow_mut().push(self.tag.to_ascii_uppercase());
    }
}

/// Panics on any event.
struct Exploding;

impl ModelListener for Exploding {
    fn on_turn_switch(&mut self, _player: Player) {
        panic!("listener failure");
    }

    fn on_game_over(&mut self) {
        panic!("listener failure");
    }
}

#[test]
fn test_full_game_event_sequence() {
    let mut model = model();
    let log = Rc::new(RefCell::new(EventLog::new()));
    subscribe(&mut model, &log);

    model.start_game();
    model.switch_player();
    model.switch_player();
    model.end_game();

    assert_eq!(
        log.borrow().events,
        vec![
            GameEvent::TurnSwitch(Player::Red),
            GameEvent::TurnSwitch(Player::Blue),
            GameEvent::TurnSwitch(Player::Red),
            GameEvent::GameOver,
        ]
    );
}

#[test]
fn test_listeners_notified_in_subscription_order() {
    let mut model = model();
    let entries = Rc::new(RefCell::new(String::new()));
    let a = Rc::new(RefCell::new(Journal { tag: 'a', entries: entries.clone() }));
    let b = Rc::new(RefCell::new(Journal { tag: 'b', entries: entries.clone() }));
    subscribe(&mut model, &b);
    subscribe(&mut model, &a);

    model.switch_player();
    model.end_game();

    assert_eq!(*entries.borrow(), "baBA");
}

#[test]
fn test_unsubscribed_listener_hears_nothing() {
    let mut model = model();
    let log: Rc<RefCell<dyn ModelListener>> = Rc::new(RefCell::new(EventLog::new()));
    let id = model.subscribe(Rc::downgrade(&log));
    assert!(model.unsubscribe(id));

    let kept = Rc::new(RefCell::new(EventLog::new()));
    subscribe(&mut model, &kept);
    model.switch_player();

    assert_eq!(kept.borrow().events.len(), 1);
    assert!(!model.unsubscribe(id));
}

#[test]
fn test_dropped_listener_is_skipped() {
    let mut model = model();
    let kept = Rc::new(RefCell::new(EventLog::new()));
    {
        let transient = Rc::new(RefCell::new(EventLog::new()));
        subscribe(&mut model, &transient);
    }
    subscribe(&mut model, &kept);

    model.switch_player();
    assert_eq!(kept.borrow().events, vec![GameEvent::TurnSwitch(Player::Blue)]);
}

#[test]
fn test_listener_panic_propagates() {
    let mut model = model();
    let exploding = Rc::new(RefCell::new(Exploding));
    let after = Rc::new(RefCell::new(EventLog::new()));
    subscribe(&mut model, &exploding);
    subscribe(&mut model, &after);

    let outcome = catch_unwind(AssertUnwindSafe(|| model.switch_player()));

    assert!(outcome.is_err());
    assert!(after.borrow().events.is_empty());
}

//! Application-level UI event bus with typed event names.
//!
//! Cross-tree signaling (the fallback view asking the shell to open its
//! drawer) goes through this bus instead of an untyped global DOM channel.
//! Single-threaded by construction; publishing synchronously notifies every
//! live subscriber.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The closed set of events the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Ask the shell to open the settings drawer.
    OpenSettings,
}

type Handler = Rc<dyn Fn(UiEvent)>;

#[derive(Clone, Default)]
pub struct UiBus {
    handlers: Rc<RefCell<Vec<(usize, Handler)>>>,
    next_id: Rc<Cell<usize>>,
}

impl UiBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays live until the returned subscription is
    /// dropped.
    pub fn subscribe(&self, handler: impl Fn(UiEvent) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        Subscription {
            bus: self.clone(),
            id,
        }
    }

    pub fn publish(&self, event: UiEvent) {
        // Snapshot first: a handler may subscribe or unsubscribe while
        // running, which must not alias the live borrow.
        let snapshot: Vec<Handler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in snapshot {
            handler(event);
        }
    }

    fn unsubscribe(&self, id: usize) {
        self.handlers.borrow_mut().retain(|(slot, _)| *slot != id);
    }
}

/// Keeps one handler registered; unregisters on drop.
pub struct Subscription {
    bus: UiBus,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_every_live_subscriber_once() {
        let bus = UiBus::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let _a = bus.subscribe({
            let first = first.clone();
            move |_| first.set(first.get() + 1)
        });
        let _b = bus.subscribe({
            let second = second.clone();
            move |_| second.set(second.get() + 1)
        });

        bus.publish(UiEvent::OpenSettings);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn a_dropped_subscription_is_no_longer_invoked() {
        let bus = UiBus::new();
        let count = Rc::new(Cell::new(0));

        let sub = bus.subscribe({
            let count = count.clone();
            move |_| count.set(count.get() + 1)
        });
        bus.publish(UiEvent::OpenSettings);
        drop(sub);
        bus.publish(UiEvent::OpenSettings);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        UiBus::new().publish(UiEvent::OpenSettings);
    }
}

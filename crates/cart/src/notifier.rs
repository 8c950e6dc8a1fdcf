//! Fan-out of cart changes to UI surfaces.
//!
//! Two delivery paths share one source of truth:
//!
//! - handlers registered with [`CartNotifier::subscribe`] run synchronously,
//!   in subscription order, before the mutating call returns;
//! - [`CartNotifier::watch`] hands out a `tokio::sync::watch` receiver for
//!   async surfaces. The channel keeps only the latest snapshot, so a burst of
//!   mutations coalesces into one wake-up carrying the final state.

use serde::Serialize;
use tokio::sync::watch;

// ---------------------------------------------------------------------------
// CartEvent
// ---------------------------------------------------------------------------

/// What happened to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "activityId", rename_all = "camelCase")]
pub enum CartChange {
    /// The selection was (re)loaded from durable storage.
    Hydrated,
    Added(String),
    Removed(String),
    /// The selection was explicitly emptied.
    Cleared,
}

/// A committed change plus the selection as it stands afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEvent {
    pub change: CartChange,
    pub snapshot: Vec<String>,
}

// ---------------------------------------------------------------------------
// CartNotifier
// ---------------------------------------------------------------------------

/// Handle returned by [`CartNotifier::subscribe`]; pass it to
/// [`CartNotifier::unsubscribe`] to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&CartEvent)>;

/// Publish/subscribe hub for cart changes.
pub struct CartNotifier {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
    sender: watch::Sender<Vec<String>>,
}

impl CartNotifier {
    /// Create a notifier whose watch channel starts at `initial`.
    pub fn new(initial: Vec<String>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            handlers: Vec::new(),
            next_id: 0,
            sender,
        }
    }

    /// Register a handler for every subsequent change.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// A receiver that always observes the latest snapshot.
    pub fn watch(&self) -> watch::Receiver<Vec<String>> {
        self.sender.subscribe()
    }

    /// Deliver `event` to every handler, then update the watch channel.
    pub fn publish(&mut self, event: CartEvent) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(&event);
        }
        // send_replace stores the value even with zero receivers.
        self.sender.send_replace(event.snapshot);
    }
}

impl std::fmt::Debug for CartNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartNotifier")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn event(change: CartChange, snapshot: &[&str]) -> CartEvent {
        CartEvent {
            change,
            snapshot: snapshot.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = CartNotifier::new(Vec::new());

        let l1 = Rc::clone(&log);
        notifier.subscribe(move |_| l1.borrow_mut().push("drawer"));
        let l2 = Rc::clone(&log);
        notifier.subscribe(move |_| l2.borrow_mut().push("toast"));

        notifier.publish(event(CartChange::Added("a".into()), &["a"]));

        assert_eq!(*log.borrow(), vec!["drawer", "toast"]);
    }

    #[test]
    fn unsubscribed_handler_stops_receiving() {
        let hits = Rc::new(RefCell::new(0));
        let mut notifier = CartNotifier::new(Vec::new());

        let h = Rc::clone(&hits);
        let id = notifier.subscribe(move |_| *h.borrow_mut() += 1);
        notifier.publish(event(CartChange::Added("a".into()), &["a"]));

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.publish(event(CartChange::Cleared, &[]));

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn watch_coalesces_to_latest_snapshot() {
        let mut notifier = CartNotifier::new(Vec::new());
        let mut rx = notifier.watch();

        notifier.publish(event(CartChange::Added("a".into()), &["a"]));
        notifier.publish(event(CartChange::Added("b".into()), &["a", "b"]));
        notifier.publish(event(CartChange::Removed("a".into()), &["b"]));

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec!["b".to_string()]);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn watch_created_late_sees_current_state() {
        let mut notifier = CartNotifier::new(vec!["x".into()]);
        notifier.publish(event(CartChange::Added("y".into()), &["x", "y"]));

        let rx = notifier.watch();
        assert_eq!(*rx.borrow(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn event_serializes_with_kind_tag() {
        let json = serde_json::to_value(event(CartChange::Added("a".into()), &["a"])).unwrap();
        assert_eq!(json["change"]["kind"], "added");
        assert_eq!(json["change"]["activityId"], "a");
        assert_eq!(json["snapshot"][0], "a");
    }
}

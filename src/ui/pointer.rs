//! Application-wide pointer dispatch
//!
//! Components that need to react to pointer presses anywhere on screen
//! subscribe here. A subscription is an RAII guard: dropping it removes the
//! listener, so a torn-down component never hears another press.

use ratatui::layout::Position;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// A primary-button press at a screen cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerDown {
    pub position: Position,
}

impl PointerDown {
    pub fn at(column: u16, row: u16) -> Self {
        Self {
            position: Position::new(column, row),
        }
    }
}

type Listeners = HashMap<u64, mpsc::UnboundedSender<PointerDown>>;

#[derive(Debug, Clone, Default)]
pub struct PointerBus {
    listeners: Arc<Mutex<Listeners>>,
    next_id: Arc<AtomicU64>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Presses are delivered on the returned receiver
    /// until the subscription is dropped.
    pub fn subscribe(&self) -> (PointerSubscription, mpsc::UnboundedReceiver<PointerDown>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(id, sender);
        let subscription = PointerSubscription {
            id,
            listeners: Arc::clone(&self.listeners),
        };
        (subscription, receiver)
    }

    /// Delivers a press to every registered listener.
    pub fn dispatch(&self, event: PointerDown) {
        // Receivers that went away without unsubscribing are pruned here.
        self.lock()
            .retain(|_, sender| sender.send(event).is_ok());
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a pointer listener registered for as long as it lives.
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    listeners: Arc<Mutex<Listeners>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_is_released_on_drop() {
        let bus = PointerBus::new();
        let (first, _rx1) = bus.subscribe();
        let (second, _rx2) = bus.subscribe();
        assert_eq!(bus.listener_count(), 2);

        drop(first);
        assert_eq!(bus.listener_count(), 1);
        drop(second);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn dispatch_reaches_every_listener() {
        let bus = PointerBus::new();
        let (_a, mut rx_a) = bus.subscribe();
        let (_b, mut rx_b) = bus.subscribe();

        bus.dispatch(PointerDown::at(3, 4));

        assert_eq!(rx_a.try_recv().unwrap(), PointerDown::at(3, 4));
        assert_eq!(rx_b.try_recv().unwrap(), PointerDown::at(3, 4));
    }

    #[test]
    fn dropped_subscription_receives_nothing() {
        let bus = PointerBus::new();
        let (sub, mut rx) = bus.subscribe();
        drop(sub);

        bus.dispatch(PointerDown::at(0, 0));
        assert!(rx.try_recv().is_err());
    }
}

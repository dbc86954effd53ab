//! Thread-safe event bus using mpsc channels.
//!
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The UI thread collects them via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer queue of [`AppEvent`]s.
///
/// # Example
///
/// ```
/// use lang_indicator::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ShowNow);
///
/// let events = bus.drain();
/// assert_eq!(events, vec![AppEvent::ShowNow]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// If the bus has been dropped (app shutting down), the send
    /// silently fails.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlacementMode;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleShowShape);
        publisher.publish(AppEvent::SetHideDelay(4));
        publisher.publish(AppEvent::Quit);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::ToggleShowShape,
                AppEvent::SetHideDelay(4),
                AppEvent::Quit
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ShowNow);
        publisher.publish(AppEvent::ShowAbout);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_another_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || {
            publisher.publish(AppEvent::SetPlacement(PlacementMode::Caret));
        })
        .join()
        .unwrap();

        assert_eq!(
            bus.try_recv(),
            Some(AppEvent::SetPlacement(PlacementMode::Caret))
        );
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_ignored() {
        let bus = EventBus::default();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::Quit);
    }
}

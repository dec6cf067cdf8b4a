use std::collections::VecDeque;

use crate::event::AppEvent;

/// A simple FIFO queue of app events.
///
/// The run loop uses the bus in a three-phase cycle: input polling, the
/// feed timer, and the audit poll publish events; the loop then drains
/// all pending events in order and reacts to each one.
pub struct EventBus {
    queue: VecDeque<AppEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create an empty event bus.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an event at the back of the queue.
    pub fn publish(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    /// Remove and return all pending events, preserving insertion order.
    pub fn drain(&mut self) -> Vec<AppEvent> {
        self.queue.drain(..).collect()
    }

    /// Return `true` if the queue contains at least one event.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemitrace_stream::event::Severity;

    #[test]
    fn publish_enqueues_events() {
        let mut bus = EventBus::new();
        bus.publish(AppEvent::Feed {
            severity: Severity::Inf,
        });
        bus.publish(AppEvent::Quit);
        assert!(bus.has_pending());
    }

    #[test]
    fn drain_returns_all_and_empties() {
        let mut bus = EventBus::new();
        bus.publish(AppEvent::AuditStarted);
        bus.publish(AppEvent::Quit);
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn drain_on_empty_returns_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn preserves_order() {
        let mut bus = EventBus::new();
        bus.publish(AppEvent::Feed {
            severity: Severity::Crt,
        });
        bus.publish(AppEvent::AuditFinished);
        bus.publish(AppEvent::Quit);
        let events = bus.drain();
        assert!(matches!(
            events[0],
            AppEvent::Feed {
                severity: Severity::Crt
            }
        ));
        assert!(matches!(events[1], AppEvent::AuditFinished));
        assert!(matches!(events[2], AppEvent::Quit));
    }
}

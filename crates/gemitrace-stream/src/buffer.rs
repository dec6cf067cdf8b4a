use rand::Rng;

use crate::event::TelemetryEvent;
use crate::generator::EventGenerator;

/// Maximum number of events retained for display.
pub const MAX_EVENTS: usize = 50;

/// Number of events generated up front when a session starts.
pub const SEED_EVENTS: usize = 15;

/// Bounded, newest-first history of telemetry events.
///
/// The only mutation path after seeding is [`record`](EventBuffer::record):
/// prepend one event, then drop everything past index `MAX_EVENTS - 1`.
/// There is no per-event delete, search, or update.
#[derive(Default)]
pub struct EventBuffer {
    events: Vec<TelemetryEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-populated with [`SEED_EVENTS`] freshly generated events,
    /// in generation order.
    pub fn seeded<R: Rng>(generator: &EventGenerator, rng: &mut R) -> Self {
        let events = (0..SEED_EVENTS).map(|_| generator.generate(rng)).collect();
        Self { events }
    }

    /// Prepend one event and truncate to the display cap.
    pub fn record(&mut self, event: TelemetryEvent) {
        self.events.insert(0, event);
        self.events.truncate(MAX_EVENTS);
    }

    /// All buffered events, newest first.
    pub fn events(&self) -> &[TelemetryEvent] {
        &self.events
    }

    /// Cloned snapshot of the `n` newest events, for work that must not
    /// observe later buffer mutations (the audit request).
    pub fn snapshot_newest(&self, n: usize) -> Vec<TelemetryEvent> {
        self.events[..n.min(self.events.len())].to_vec()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

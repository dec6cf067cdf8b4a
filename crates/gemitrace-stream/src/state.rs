use rand::Rng;

use crate::buffer::EventBuffer;
use crate::chart::{self, TrendPoint};
use crate::event::TelemetryEvent;
use crate::generator::EventGenerator;
use crate::stats::DashboardStats;

/// Buffer plus its derived views, kept consistent as one unit.
///
/// Every mutation goes through [`record`](StreamState::record), which
/// rebuilds the statistics and the trend series from scratch — derived
/// state is never patched incrementally.
pub struct StreamState {
    buffer: EventBuffer,
    stats: DashboardStats,
    trend: Vec<TrendPoint>,
}

impl StreamState {
    /// Session-start state: buffer seeded with the initial batch,
    /// derived views computed once.
    pub fn seeded<R: Rng>(generator: &EventGenerator, rng: &mut R) -> Self {
        let buffer = EventBuffer::seeded(generator, rng);
        let stats = DashboardStats::compute(buffer.events());
        let trend = chart::project(buffer.events());
        Self {
            buffer,
            stats,
            trend,
        }
    }

    /// Record one event and recompute the derived views.
    pub fn record(&mut self, event: TelemetryEvent) {
        self.buffer.record(event);
        self.stats = DashboardStats::compute(self.buffer.events());
        self.trend = chart::project(self.buffer.events());
    }

    pub fn events(&self) -> &[TelemetryEvent] {
        self.buffer.events()
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn trend(&self) -> &[TrendPoint] {
        &self.trend
    }

    pub fn snapshot_newest(&self, n: usize) -> Vec<TelemetryEvent> {
        self.buffer.snapshot_newest(n)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

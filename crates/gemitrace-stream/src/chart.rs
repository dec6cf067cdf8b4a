use crate::event::TelemetryEvent;

/// How many of the newest events feed the trend chart.
pub const CHART_WINDOW: usize = 20;

/// One chart sample: capture time plus the two plotted series.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub timestamp: String,
    pub latency: f64,
    pub risk: f64,
}

/// Project the newest [`CHART_WINDOW`] buffer entries into a
/// chronological series (oldest of the window first — the reverse of
/// buffer order, since the buffer is newest-first).
pub fn project(events: &[TelemetryEvent]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = events
        .iter()
        .take(CHART_WINDOW)
        .map(|e| TrendPoint {
            timestamp: e.timestamp.clone(),
            latency: e.latency_ms(),
            risk: e.severity.risk_score(),
        })
        .collect();
    points.reverse();
    points
}

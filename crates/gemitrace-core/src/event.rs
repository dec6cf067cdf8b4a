use gemitrace_stream::event::Severity;

/// App-level happenings routed through the [`crate::bus::EventBus`].
///
/// Distinct from [`gemitrace_stream::event::TelemetryEvent`] — these
/// describe the session, not the simulated platform.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The feed timer fired and one telemetry event entered the buffer.
    Feed { severity: Severity },
    /// Terminal was resized.
    Resize { cols: u16, rows: u16 },
    /// An audit request was dispatched to the worker.
    AuditStarted,
    /// The audit worker delivered its narrative (or the fallback text).
    AuditFinished,
    Quit,
}

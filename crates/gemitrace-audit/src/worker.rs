use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use gemitrace_stream::event::TelemetryEvent;

use crate::client::{AuditError, GeminiClient};
use crate::prompt;

/// User-visible text when the analysis call fails for any reason.
pub const FALLBACK_TEXT: &str =
    "Failed to analyze telemetry stream. Please check API configuration.";

/// User-visible text when the service succeeds but returns nothing.
pub const UNAVAILABLE_TEXT: &str = "Analysis unavailable.";

/// Abstraction over the analysis service so the requester can be exercised
/// without network access.
pub trait AuditBackend: Send + 'static {
    fn analyze(&self, events: &[TelemetryEvent]) -> Result<String, AuditError>;
}

impl AuditBackend for GeminiClient {
    fn analyze(&self, events: &[TelemetryEvent]) -> Result<String, AuditError> {
        let prompt = prompt::build_prompt(events);
        self.generate(&prompt)
    }
}

/// Audit lifecycle as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditStatus {
    Idle,
    Requesting,
    Complete(String),
}

/// Single-flight audit runner. One request at a time; the result is polled
/// from the render loop and held until dismissed.
pub struct AuditRequester {
    status: AuditStatus,
    rx: Option<Receiver<String>>,
}

impl Default for AuditRequester {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditRequester {
    pub fn new() -> Self {
        Self {
            status: AuditStatus::Idle,
            rx: None,
        }
    }

    pub fn status(&self) -> &AuditStatus {
        &self.status
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.status, AuditStatus::Requesting)
    }

    /// Start an audit over the given snapshot on a worker thread.
    ///
    /// Returns false without side effects when a request is already in
    /// flight.
    pub fn trigger<B: AuditBackend>(&mut self, backend: B, snapshot: Vec<TelemetryEvent>) -> bool {
        if self.is_requesting() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let text = match backend.analyze(&snapshot) {
                Ok(text) if text.trim().is_empty() => UNAVAILABLE_TEXT.to_string(),
                Ok(text) => text,
                Err(err) => {
                    tracing::error!("compliance audit failed: {err}");
                    FALLBACK_TEXT.to_string()
                }
            };
            // Receiver may be gone if the app quit mid-request.
            let _ = tx.send(text);
        });

        self.status = AuditStatus::Requesting;
        self.rx = Some(rx);
        true
    }

    /// Check for a finished request. Returns true when a result arrived on
    /// this call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(text) => {
                self.status = AuditStatus::Complete(text);
                self.rx = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending; treat as a failed request.
                self.status = AuditStatus::Complete(FALLBACK_TEXT.to_string());
                self.rx = None;
                true
            }
        }
    }

    /// Clear a completed result and return to idle.
    pub fn dismiss(&mut self) {
        if matches!(self.status, AuditStatus::Complete(_)) {
            self.status = AuditStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use gemitrace_stream::buffer::EventBuffer;
    use gemitrace_stream::generator::EventGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct StubBackend {
        result: Result<String, ()>,
    }

    impl AuditBackend for StubBackend {
        fn analyze(&self, _events: &[TelemetryEvent]) -> Result<String, AuditError> {
            match &self.result {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(AuditError::MissingCredential),
            }
        }
    }

    /// Backend that blocks until released, for in-flight assertions.
    struct GatedBackend {
        gate: Mutex<Receiver<()>>,
    }

    impl AuditBackend for GatedBackend {
        fn analyze(&self, _events: &[TelemetryEvent]) -> Result<String, AuditError> {
            let gate = self.gate.lock().unwrap();
            let _ = gate.recv();
            Ok("done".to_string())
        }
    }

    fn wait_complete(req: &mut AuditRequester) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !req.poll() {
            assert!(Instant::now() < deadline, "audit did not complete in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn snapshot() -> Vec<TelemetryEvent> {
        let gen = EventGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        EventBuffer::seeded(&gen, &mut rng).snapshot_newest(10)
    }

    #[test]
    fn successful_audit_reaches_complete() {
        let mut req = AuditRequester::new();
        let backend = StubBackend {
            result: Ok("## Summary\nAll clear.".to_string()),
        };
        assert!(req.trigger(backend, snapshot()));
        assert!(req.is_requesting());

        wait_complete(&mut req);
        assert_eq!(
            *req.status(),
            AuditStatus::Complete("## Summary\nAll clear.".to_string())
        );
    }

    #[test]
    fn failed_audit_yields_fallback_text() {
        let mut req = AuditRequester::new();
        let backend = StubBackend { result: Err(()) };
        assert!(req.trigger(backend, snapshot()));

        wait_complete(&mut req);
        assert_eq!(*req.status(), AuditStatus::Complete(FALLBACK_TEXT.to_string()));
    }

    #[test]
    fn empty_success_yields_unavailable_text() {
        let mut req = AuditRequester::new();
        let backend = StubBackend {
            result: Ok("   ".to_string()),
        };
        assert!(req.trigger(backend, snapshot()));

        wait_complete(&mut req);
        assert_eq!(
            *req.status(),
            AuditStatus::Complete(UNAVAILABLE_TEXT.to_string())
        );
    }

    #[test]
    fn trigger_is_single_flight() {
        let (release, gate) = mpsc::channel();
        let mut req = AuditRequester::new();
        let backend = GatedBackend {
            gate: Mutex::new(gate),
        };
        assert!(req.trigger(backend, snapshot()));

        // Second trigger while in flight is refused.
        let backend = StubBackend {
            result: Ok("other".to_string()),
        };
        assert!(!req.trigger(backend, snapshot()));
        assert!(req.is_requesting());

        release.send(()).unwrap();
        wait_complete(&mut req);
        assert_eq!(*req.status(), AuditStatus::Complete("done".to_string()));
    }

    #[test]
    fn dismiss_returns_to_idle_and_allows_retrigger() {
        let mut req = AuditRequester::new();
        let backend = StubBackend {
            result: Ok("first".to_string()),
        };
        assert!(req.trigger(backend, snapshot()));
        wait_complete(&mut req);

        req.dismiss();
        assert_eq!(*req.status(), AuditStatus::Idle);

        let backend = StubBackend {
            result: Ok("second".to_string()),
        };
        assert!(req.trigger(backend, snapshot()));
        wait_complete(&mut req);
        assert_eq!(*req.status(), AuditStatus::Complete("second".to_string()));
    }

    #[test]
    fn dismiss_is_noop_while_requesting() {
        let (release, gate) = mpsc::channel();
        let mut req = AuditRequester::new();
        let backend = GatedBackend {
            gate: Mutex::new(gate),
        };
        assert!(req.trigger(backend, snapshot()));

        req.dismiss();
        assert!(req.is_requesting());

        release.send(()).unwrap();
        wait_complete(&mut req);
    }

    #[test]
    fn poll_without_request_is_false() {
        let mut req = AuditRequester::new();
        assert!(!req.poll());
        assert_eq!(*req.status(), AuditStatus::Idle);
    }
}

//! Telemetry domain for GemiTrace.
//!
//! This crate owns the synthetic event stream: the event model, the
//! generator that fabricates events, the bounded newest-first buffer, and
//! the derived views (dashboard statistics and the latency/risk trend
//! series). Everything here is pure state — rendering lives in
//! `gemitrace-ui` and scheduling in `gemitrace-app`.

pub mod buffer;
pub mod chart;
pub mod event;
pub mod generator;
pub mod state;
pub mod stats;

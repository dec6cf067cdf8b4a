//! AI compliance audit for the telemetry stream.
//!
//! Builds a prompt from a snapshot of recent events, sends it to the Gemini
//! generative API on a worker thread, and exposes the result through a small
//! state machine the UI can poll without blocking the render loop.

pub mod client;
pub mod prompt;
pub mod worker;

pub use client::{AuditError, GeminiClient};
pub use worker::{AuditBackend, AuditRequester, AuditStatus};

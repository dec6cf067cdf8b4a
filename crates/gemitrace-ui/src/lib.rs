//! TUI rendering layer for GemiTrace.
//!
//! Provides the dashboard layout, stats cards, trend chart, live event table,
//! audit sidebar, window chrome, and console overlay widgets. All rendering
//! uses [`ratatui`]; this crate owns the visual presentation while the core
//! and stream crates own the state.

pub mod audit_panel;
pub mod cards;
pub mod chart;
pub mod chrome;
pub mod console;
pub mod layout;
pub mod stream;

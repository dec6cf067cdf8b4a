//! Core infrastructure for the GemiTrace dashboard.
//!
//! This crate provides the plumbing shared by the application shell and
//! the rendering layer: the app event bus, drop-down console, command
//! system, logging subsystem, and session state.

pub mod bus;
pub mod command;
pub mod console;
pub mod event;
pub mod logging;
pub mod state;

//! Server application models and type definitions.
//!
//! Application state shared across handlers (database handle, snapshot
//! channel, token secret) and type-safe session data wrappers.

pub mod app;
pub mod session;

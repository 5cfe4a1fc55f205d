//! Data access layer repositories.
//!
//! Repositories provide an abstraction over point reads and writes to the
//! champion collection and the identity table. No query here is derived or
//! filtered; derived views are computed client-side from full snapshots.

pub mod champion;
pub mod user;

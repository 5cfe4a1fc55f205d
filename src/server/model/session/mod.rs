//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The only session state is the identity attributed to
//! writes: the user ID established by anonymous or token login.

pub mod user;

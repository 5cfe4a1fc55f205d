//! Business logic services.
//!
//! Services validate submissions before any write reaches the store, coerce
//! raw rows into strict DTOs at the boundary, and publish a fresh full
//! snapshot after every successful write. Identity resolution (anonymous or
//! token-based) also lives here.

pub mod auth;
pub mod champion;

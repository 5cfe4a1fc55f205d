//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with a test state and session, verifying
//! status codes, identity gating, and validation for every API endpoint.

mod auth;
mod champion;

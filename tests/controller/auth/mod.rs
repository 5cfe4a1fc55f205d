//! Tests for identity controller endpoints.

mod create_session;
mod get_session;
mod logout;

//! Tests for champion record controller endpoints.

mod create;
mod delete;
mod list;
mod update;

//! Shared controller helpers.

pub mod get_user;

//! Server application core modules.
//!
//! This module contains all server-side functionality for the Podium application:
//! HTTP routing, identity resolution, the champion record store, and the live
//! snapshot channel pushed to subscribed clients. It is the authoritative side
//! of the hall of fame; the client only renders snapshots and issues writes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;

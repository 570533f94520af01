//! Server application core modules.
//!
//! HTTP routing, session-based caller resolution, the party workflow services and their
//! database repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

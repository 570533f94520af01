//! Server-side state and identity types.

pub mod app;
pub mod auth;
pub mod session;

//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod chat;
pub mod market;
pub mod member;
pub mod party;

//! HTTP controller endpoints.
//!
//! Handlers resolve the caller from the session, delegate to a service and map the result
//! onto a status code. Each handler carries its OpenAPI description.

pub mod chat;
pub mod market;
pub mod party;
pub mod party_member;
pub mod util;

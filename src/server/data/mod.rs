//! Data access layer repositories.
//!
//! Repositories are generic over `ConnectionTrait` so the services can run them against a
//! plain connection or inside a transaction.

pub mod chat_message;
pub mod item;
pub mod market;
pub mod party;
pub mod party_member;
pub mod user;

//! Database entities for marketparty.
//!
//! Party and membership entities carry their own lifecycle operations; the
//! remaining entities are reference data (items, markets, users) and the
//! per-party chat log.

pub mod prelude;

pub mod chat_message;
pub mod item;
pub mod market;
pub mod party;
pub mod party_member;
pub mod user;

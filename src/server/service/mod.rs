//! Service layer for the party workflow.
//!
//! Services validate input, run each use case inside one transaction and return response
//! projections. Repositories do the data access.

pub mod chat;
pub mod party;
pub mod party_member;

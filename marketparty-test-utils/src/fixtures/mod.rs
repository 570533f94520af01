//! Test fixture modules.
//!
//! - `user` - User accounts with or without a registered location
//! - `catalog` - Items and markets
//! - `party` - Parties and their memberships
//! - `factory` - In-memory models for unit tests that never touch the database

pub mod catalog;
pub mod factory;
pub mod party;
pub mod user;

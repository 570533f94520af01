//! Typed accessors for values stored in the tower-sessions session.

pub mod user;

//! Utility functions shared by services and controllers.
//!
//! - `geo` - great-circle distance and the bounding box used to prefilter nearby parties
//! - `time` - parsing and formatting of the `MM-dd HH:mm` party time format

pub mod geo;
pub mod time;

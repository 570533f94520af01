//! Shared values used by fixtures and tests.
//!
//! Coordinates are kept non-integral so they survive the SQLite decimal round trip
//! unchanged.

use rust_decimal::Decimal;

/// Latitude of the default test market (Mangwon Market, Seoul).
pub const TEST_LATITUDE: Decimal = Decimal::from_parts(375_565_100, 0, 0, false, 7);

/// Longitude of the default test market (Mangwon Market, Seoul).
pub const TEST_LONGITUDE: Decimal = Decimal::from_parts(1_269_051_200, 0, 0, false, 7);

/// Market name used by party fixtures.
pub static TEST_MARKET_NAME: &str = "Mangwon Market";

/// Market address used by party fixtures.
pub static TEST_MARKET_ADDRESS: &str = "8 Poeun-ro, Mapo-gu, Seoul";

/// Unix timestamp the fixture clock reports by default: 2026-03-10 09:00:00 UTC.
pub const TEST_NOW_TIMESTAMP: i64 = 1_773_133_200;

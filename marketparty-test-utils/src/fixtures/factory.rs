//! Factory functions for in-memory database models.
//!
//! These never touch the database and are meant for unit tests of pure logic such as
//! status recomputation or response mapping.

use chrono::{NaiveDate, NaiveDateTime};
use entity::{
    party::PartyStatus,
    party_member::{InviteStatus, MemberRole},
};

use crate::constant::{TEST_LATITUDE, TEST_LONGITUDE, TEST_MARKET_ADDRESS, TEST_MARKET_NAME};

fn fixed_time(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// Create a mock party model at the default test market.
///
/// # Arguments
/// - `id` - Party ID, also used as the creator's user ID
/// - `members_count` - Target member count
/// - `status` - Current lifecycle status
pub fn mock_party_model(id: i32, members_count: i32, status: PartyStatus) -> entity::party::Model {
    entity::party::Model {
        id,
        market_name: TEST_MARKET_NAME.to_string(),
        market_address: TEST_MARKET_ADDRESS.to_string(),
        latitude: TEST_LATITUDE,
        longitude: TEST_LONGITUDE,
        item_id: 1,
        item_count: 3,
        item_unit: "kg".to_string(),
        start_time: fixed_time(12, 10),
        end_time: fixed_time(12, 12),
        members_count,
        creator_id: id,
        status,
        created_at: fixed_time(10, 9),
        updated_at: fixed_time(10, 9),
    }
}

/// Create a mock membership model.
pub fn mock_member_model(
    party_id: i32,
    user_id: i32,
    role: MemberRole,
    invite_status: InviteStatus,
) -> entity::party_member::Model {
    entity::party_member::Model {
        id: user_id,
        user_id,
        party_id,
        role,
        invite_status,
        created_at: fixed_time(10, 9),
    }
}

/// Create a mock item model.
pub fn mock_item_model(id: i32, category: &str) -> entity::item::Model {
    entity::item::Model {
        id,
        name: "Napa Cabbage".to_string(),
        category: category.to_string(),
    }
}

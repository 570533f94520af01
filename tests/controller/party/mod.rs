mod cancel_party;
mod complete_party;
mod create_party;
mod get_my_parties;
mod get_nearby_parties;
mod get_party_members;
mod is_party_member;
mod update_party;

use marketparty::model::party::{PartyCreateRequest, PartyUpdateRequest};

use super::*;

fn create_request(members_count: i32) -> PartyCreateRequest {
    PartyCreateRequest {
        market_name: "Mangwon Market".to_string(),
        market_address: "8 Poeun-ro, Mapo-gu, Seoul".to_string(),
        latitude: TEST_LATITUDE,
        longitude: TEST_LONGITUDE,
        item_id: 1,
        item_count: 3,
        item_unit: "kg".to_string(),
        start_time: "03-12 10:00".to_string(),
        end_time: "03-12 12:00".to_string(),
        members_count,
    }
}

fn update_request(members_count: i32) -> PartyUpdateRequest {
    PartyUpdateRequest {
        item_id: 1,
        item_count: 5,
        item_unit: "kg".to_string(),
        start_time: "03-13 09:00".to_string(),
        end_time: "03-13 11:30".to_string(),
        members_count,
    }
}

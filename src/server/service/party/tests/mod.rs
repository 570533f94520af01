
use entity::{
    party::PartyStatus,
    party_member::{InviteStatus, MemberRole},
};
use marketparty_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{
    model::{
        member::PartyMemberUpdateRequest,
        party::{PartyCreateRequest, PartyRole, PartyUpdateRequest},
    },
    server::{
        data::{party::PartyRepository, party_member::PartyMemberRepository},
        error::{party::PartyError, Error},
        model::auth::AuthUser,
        service::party::PartyService,
    },
};

/// Builds a context with a leader (ID 1), two other users (IDs 2 and 3) and one item.
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_party_tables()
        .with_user("leader@example.com")
        .with_user("first@example.com")
        .with_user("second@example.com")
        .with_item("Napa Cabbage", "VEGETABLE")
        .build()
        .await
}

async fn caller(test: &TestContext, user_id: i32) -> Result<AuthUser, TestError> {
    let user = entity::prelude::User::find_by_id(user_id)
        .one(&test.db)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("user {}", user_id)))?;

    Ok(AuthUser::from(user))
}

fn create_request(item_id: i32, start_time: &str, end_time: &str) -> PartyCreateRequest {
    PartyCreateRequest {
        market_name: "Mangwon Market".to_string(),
        market_address: "8 Poeun-ro, Mapo-gu, Seoul".to_string(),
        latitude: TEST_LATITUDE,
        longitude: TEST_LONGITUDE,
        item_id,
        item_count: 3,
        item_unit: "kg".to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        members_count: 2,
    }
}

fn update_request(item_id: i32, start_time: &str, end_time: &str) -> PartyUpdateRequest {
    PartyUpdateRequest {
        item_id,
        item_count: 5,
        item_unit: "box".to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        members_count: 4,
    }
}

fn decision(user_id: i32, invite_status: InviteStatus) -> PartyMemberUpdateRequest {
    PartyMemberUpdateRequest {
        user_id: Some(user_id),
        invite_status: Some(invite_status),
    }
}

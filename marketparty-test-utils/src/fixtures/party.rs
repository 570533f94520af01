use chrono::Duration;
use entity::{
    chat_message::MessageType,
    party::PartyStatus,
    party_member::{InviteStatus, MemberRole},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    constant::{TEST_LATITUDE, TEST_LONGITUDE, TEST_MARKET_ADDRESS, TEST_MARKET_NAME},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn party(&self) -> PartyFixtures<'_> {
        PartyFixtures { setup: self }
    }
}

pub struct PartyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PartyFixtures<'a> {
    /// Insert a recruiting party at the default test market along with its accepted leader.
    ///
    /// The party runs two days after the fixture clock, from 10:00 to 12:00.
    pub async fn insert_party(
        &self,
        creator_id: i32,
        item_id: i32,
        members_count: i32,
    ) -> Result<entity::party::Model, TestError> {
        self.insert_party_at(
            creator_id,
            item_id,
            members_count,
            TEST_LATITUDE,
            TEST_LONGITUDE,
        )
        .await
    }

    pub async fn insert_party_at(
        &self,
        creator_id: i32,
        item_id: i32,
        members_count: i32,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<entity::party::Model, TestError> {
        let now = self.setup.clock.utc().naive_utc();
        let start_time = (now + Duration::days(2))
            .date()
            .and_hms_opt(10, 0, 0)
            .unwrap_or(now);

        let party = entity::prelude::Party::insert(entity::party::ActiveModel {
            market_name: ActiveValue::Set(TEST_MARKET_NAME.to_string()),
            market_address: ActiveValue::Set(TEST_MARKET_ADDRESS.to_string()),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            item_id: ActiveValue::Set(item_id),
            item_count: ActiveValue::Set(3),
            item_unit: ActiveValue::Set("kg".to_string()),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(start_time + Duration::hours(2)),
            members_count: ActiveValue::Set(members_count),
            creator_id: ActiveValue::Set(creator_id),
            status: ActiveValue::Set(PartyStatus::Recruiting),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        self.insert_membership(
            party.id,
            creator_id,
            MemberRole::Leader,
            InviteStatus::Accepted,
        )
        .await?;

        Ok(party)
    }

    /// Force a party into the given status, bypassing the lifecycle rules.
    pub async fn set_status(
        &self,
        party: entity::party::Model,
        status: PartyStatus,
    ) -> Result<entity::party::Model, TestError> {
        let mut party = party.into_active_model();
        party.status = ActiveValue::Set(status);

        Ok(party.update(&self.setup.db).await?)
    }

    /// Insert a regular member with the given invitation state.
    pub async fn insert_member(
        &self,
        party_id: i32,
        user_id: i32,
        invite_status: InviteStatus,
    ) -> Result<entity::party_member::Model, TestError> {
        self.insert_membership(party_id, user_id, MemberRole::Member, invite_status)
            .await
    }

    async fn insert_membership(
        &self,
        party_id: i32,
        user_id: i32,
        role: MemberRole,
        invite_status: InviteStatus,
    ) -> Result<entity::party_member::Model, TestError> {
        Ok(
            entity::prelude::PartyMember::insert(entity::party_member::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                party_id: ActiveValue::Set(party_id),
                role: ActiveValue::Set(role),
                invite_status: ActiveValue::Set(invite_status),
                created_at: ActiveValue::Set(self.setup.clock.utc().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a chat message `offset_seconds` after the fixture clock.
    pub async fn insert_message(
        &self,
        party_id: i32,
        sender: &str,
        content: &str,
        offset_seconds: i64,
    ) -> Result<entity::chat_message::Model, TestError> {
        let created_at = self.setup.clock.utc().naive_utc() + Duration::seconds(offset_seconds);

        Ok(
            entity::prelude::ChatMessage::insert(entity::chat_message::ActiveModel {
                party_id: ActiveValue::Set(party_id),
                sender: ActiveValue::Set(sender.to_string()),
                message_type: ActiveValue::Set(MessageType::Talk),
                content: ActiveValue::Set(content.to_string()),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

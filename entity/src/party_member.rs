use sea_orm::{entity::prelude::*, ActiveValue};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    #[sea_orm(string_value = "LEADER")]
    Leader,
    #[sea_orm(string_value = "MEMBER")]
    Member,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

/// A user's role and invite status within one party.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "party_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub party_id: i32,
    pub role: MemberRole,
    pub invite_status: InviteStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Party,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds a membership; the role is fixed from here on
    pub fn new_membership(
        user_id: i32,
        party_id: i32,
        role: MemberRole,
        invite_status: InviteStatus,
        now: DateTime,
    ) -> Self {
        Self {
            user_id: ActiveValue::Set(user_id),
            party_id: ActiveValue::Set(party_id),
            role: ActiveValue::Set(role),
            invite_status: ActiveValue::Set(invite_status),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Model {
    /// Sets the invite status without checking the previous value.
    ///
    /// Whether a given change is allowed is decided by the caller.
    pub fn update_invite_status(&mut self, invite_status: InviteStatus) {
        self.invite_status = invite_status;
    }

    pub fn is_accepted(&self) -> bool {
        self.invite_status == InviteStatus::Accepted
    }
}

use chrono::NaiveDateTime;
use entity::party_member::{InviteStatus, MemberRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

pub struct PartyMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartyMemberRepository<'a, C> {
    /// Creates a new instance of [`PartyMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        party_id: i32,
        role: MemberRole,
        invite_status: InviteStatus,
        now: NaiveDateTime,
    ) -> Result<entity::party_member::Model, DbErr> {
        entity::party_member::ActiveModel::new_membership(
            user_id,
            party_id,
            role,
            invite_status,
            now,
        )
        .insert(self.db)
        .await
    }

    pub async fn get_by_party_id_and_user_id(
        &self,
        party_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::party_member::Model>, DbErr> {
        entity::prelude::PartyMember::find()
            .filter(entity::party_member::Column::PartyId.eq(party_id))
            .filter(entity::party_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Every membership of a party, in join order
    pub async fn get_by_party_id(
        &self,
        party_id: i32,
    ) -> Result<Vec<entity::party_member::Model>, DbErr> {
        entity::prelude::PartyMember::find()
            .filter(entity::party_member::Column::PartyId.eq(party_id))
            .order_by_asc(entity::party_member::Column::Id)
            .all(self.db)
            .await
    }

    /// Every membership a user holds, each with its party
    pub async fn get_by_user_id_with_party(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::party_member::Model,
            Option<entity::party::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::PartyMember::find()
            .filter(entity::party_member::Column::UserId.eq(user_id))
            .find_also_related(entity::party::Entity)
            .order_by_asc(entity::party_member::Column::Id)
            .all(self.db)
            .await
    }

    /// Persists every field of `member`
    pub async fn update(
        &self,
        member: entity::party_member::Model,
    ) -> Result<entity::party_member::Model, DbErr> {
        member.into_active_model().reset_all().update(self.db).await
    }
}

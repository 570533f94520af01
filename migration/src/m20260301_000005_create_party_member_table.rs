use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_user_table::User, m20260301_000004_create_party_table::Party,
};

static IDX_PARTY_MEMBER_PARTY_USER: &str = "idx_party_member_party_id_user_id";
static IDX_PARTY_MEMBER_USER_ID: &str = "idx_party_member_user_id";
static FK_PARTY_MEMBER_PARTY_ID: &str = "fk_party_member_party_id";
static FK_PARTY_MEMBER_USER_ID: &str = "fk_party_member_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyMember::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyMember::Id))
                    .col(integer(PartyMember::UserId))
                    .col(integer(PartyMember::PartyId))
                    .col(string_len(PartyMember::Role, 16))
                    .col(string_len(PartyMember::InviteStatus, 16))
                    .col(timestamp(PartyMember::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One membership per user and party
        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTY_MEMBER_PARTY_USER)
                    .table(PartyMember::Table)
                    .col(PartyMember::PartyId)
                    .col(PartyMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTY_MEMBER_USER_ID)
                    .table(PartyMember::Table)
                    .col(PartyMember::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_MEMBER_PARTY_ID)
                    .from_tbl(PartyMember::Table)
                    .from_col(PartyMember::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_MEMBER_USER_ID)
                    .from_tbl(PartyMember::Table)
                    .from_col(PartyMember::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_MEMBER_USER_ID)
                    .table(PartyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_MEMBER_PARTY_ID)
                    .table(PartyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARTY_MEMBER_USER_ID)
                    .table(PartyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARTY_MEMBER_PARTY_USER)
                    .table(PartyMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PartyMember {
    Table,
    Id,
    UserId,
    PartyId,
    Role,
    InviteStatus,
    CreatedAt,
}

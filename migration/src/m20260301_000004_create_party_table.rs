use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_item_table::Item,
};

static IDX_PARTY_CREATOR_ID: &str = "idx_party_creator_id";
static IDX_PARTY_LOCATION: &str = "idx_party_latitude_longitude";
static FK_PARTY_ITEM_ID: &str = "fk_party_item_id";
static FK_PARTY_CREATOR_ID: &str = "fk_party_creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Party::Table)
                    .if_not_exists()
                    .col(pk_auto(Party::Id))
                    .col(string(Party::MarketName))
                    .col(string(Party::MarketAddress))
                    .col(decimal_len(Party::Latitude, 10, 7))
                    .col(decimal_len(Party::Longitude, 10, 7))
                    .col(integer(Party::ItemId))
                    .col(integer(Party::ItemCount))
                    .col(string(Party::ItemUnit))
                    .col(timestamp(Party::StartTime))
                    .col(timestamp(Party::EndTime))
                    .col(integer(Party::MembersCount))
                    .col(integer(Party::CreatorId))
                    .col(string_len(Party::Status, 16))
                    .col(timestamp(Party::CreatedAt))
                    .col(timestamp(Party::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTY_CREATOR_ID)
                    .table(Party::Table)
                    .col(Party::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTY_LOCATION)
                    .table(Party::Table)
                    .col(Party::Latitude)
                    .col(Party::Longitude)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_ITEM_ID)
                    .from_tbl(Party::Table)
                    .from_col(Party::ItemId)
                    .to_tbl(Item::Table)
                    .to_col(Item::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_CREATOR_ID)
                    .from_tbl(Party::Table)
                    .from_col(Party::CreatorId)
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
                    .name(FK_PARTY_CREATOR_ID)
                    .table(Party::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_ITEM_ID)
                    .table(Party::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARTY_LOCATION)
                    .table(Party::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARTY_CREATOR_ID)
                    .table(Party::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Party {
    Table,
    Id,
    MarketName,
    MarketAddress,
    Latitude,
    Longitude,
    ItemId,
    ItemCount,
    ItemUnit,
    StartTime,
    EndTime,
    MembersCount,
    CreatorId,
    Status,
    CreatedAt,
    UpdatedAt,
}

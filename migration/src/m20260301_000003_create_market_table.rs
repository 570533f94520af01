use sea_orm_migration::{prelude::*, schema::*};

static IDX_MARKET_NAME_ADDRESS: &str = "idx_market_name_address";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Market::Table)
                    .if_not_exists()
                    .col(pk_auto(Market::Id))
                    .col(string(Market::MarketName))
                    .col(string(Market::MarketAddress))
                    .col(decimal_len(Market::Latitude, 10, 7))
                    .col(decimal_len(Market::Longitude, 10, 7))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MARKET_NAME_ADDRESS)
                    .table(Market::Table)
                    .col(Market::MarketName)
                    .col(Market::MarketAddress)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARKET_NAME_ADDRESS)
                    .table(Market::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Market::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Market {
    Table,
    Id,
    MarketName,
    MarketAddress,
    Latitude,
    Longitude,
}

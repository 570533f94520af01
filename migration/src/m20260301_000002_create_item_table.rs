use sea_orm_migration::{prelude::*, schema::*};

static IDX_ITEM_CATEGORY: &str = "idx_item_category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string(Item::Name))
                    .col(string(Item::Category))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_CATEGORY)
                    .table(Item::Table)
                    .col(Item::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_CATEGORY)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    Name,
    Category,
}

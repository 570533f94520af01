use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000004_create_party_table::Party;

static IDX_CHAT_MESSAGE_PARTY_CREATED: &str = "idx_chat_message_party_id_created_at";
static FK_CHAT_MESSAGE_PARTY_ID: &str = "fk_chat_message_party_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::PartyId))
                    .col(string(ChatMessage::Sender))
                    .col(string_len(ChatMessage::MessageType, 16))
                    .col(text(ChatMessage::Content))
                    .col(timestamp(ChatMessage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_MESSAGE_PARTY_CREATED)
                    .table(ChatMessage::Table)
                    .col(ChatMessage::PartyId)
                    .col(ChatMessage::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAT_MESSAGE_PARTY_ID)
                    .from_tbl(ChatMessage::Table)
                    .from_col(ChatMessage::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAT_MESSAGE_PARTY_ID)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_MESSAGE_PARTY_CREATED)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChatMessage {
    Table,
    Id,
    PartyId,
    Sender,
    MessageType,
    Content,
    CreatedAt,
}

use chrono::NaiveDateTime;
use entity::chat_message::MessageType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ChatMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatMessageRepository<'a, C> {
    /// Creates a new instance of [`ChatMessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        party_id: i32,
        sender: &str,
        message_type: MessageType,
        content: &str,
        now: NaiveDateTime,
    ) -> Result<entity::chat_message::Model, DbErr> {
        let message = entity::chat_message::ActiveModel {
            party_id: ActiveValue::Set(party_id),
            sender: ActiveValue::Set(sender.to_string()),
            message_type: ActiveValue::Set(message_type),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// A party's messages, oldest first
    pub async fn get_by_party_id(
        &self,
        party_id: i32,
    ) -> Result<Vec<entity::chat_message::Model>, DbErr> {
        entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::PartyId.eq(party_id))
            .order_by_asc(entity::chat_message::Column::CreatedAt)
            .order_by_asc(entity::chat_message::Column::Id)
            .all(self.db)
            .await
    }
}

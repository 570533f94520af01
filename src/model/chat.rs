use chrono::NaiveDateTime;
use entity::chat_message::MessageType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    #[schema(value_type = String, example = "TALK")]
    pub message_type: MessageType,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    pub id: i32,
    pub party_id: i32,
    pub sender: String,
    #[schema(value_type = String, example = "TALK")]
    pub message_type: MessageType,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::chat_message::Model> for ChatMessageResponse {
    fn from(message: entity::chat_message::Model) -> Self {
        Self {
            id: message.id,
            party_id: message.party_id,
            sender: message.sender,
            message_type: message.message_type,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

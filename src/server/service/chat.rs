use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::chat::{ChatMessageRequest, ChatMessageResponse},
    server::{
        data::{chat_message::ChatMessageRepository, party::PartyRepository},
        error::{party::PartyError, Error},
        model::{app::SharedClock, auth::AuthUser},
    },
};

/// Persisted chat log of a party.
pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a SharedClock,
}

impl<'a> ChatService<'a> {
    /// Creates a new instance of [`ChatService`]
    pub fn new(db: &'a DatabaseConnection, clock: &'a SharedClock) -> Self {
        Self { db, clock }
    }

    /// Appends a message sent by the caller.
    pub async fn send_message(
        &self,
        party_id: i32,
        request: ChatMessageRequest,
        caller: &AuthUser,
    ) -> Result<ChatMessageResponse, Error> {
        let txn = self.db.begin().await?;

        PartyRepository::new(&txn)
            .get_by_id(party_id, false)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;

        let message = ChatMessageRepository::new(&txn)
            .create(
                party_id,
                &caller.email,
                request.message_type,
                &request.content,
                self.clock.utc().naive_utc(),
            )
            .await?;

        txn.commit().await?;

        tracing::debug!(party_id = %party_id, message_id = %message.id, "Stored chat message");

        Ok(ChatMessageResponse::from(message))
    }

    /// The party's messages, oldest first.
    pub async fn get_chat_history(&self, party_id: i32) -> Result<Vec<ChatMessageResponse>, Error> {
        let txn = self.db.begin().await?;

        PartyRepository::new(&txn)
            .get_by_id(party_id, false)
            .await?
            .ok_or(PartyError::PartyNotFound(party_id))?;

        let messages = ChatMessageRepository::new(&txn)
            .get_by_party_id(party_id)
            .await?;

        txn.commit().await?;

        Ok(messages.into_iter().map(ChatMessageResponse::from).collect())
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatMessageRequest, ChatMessageResponse},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::chat::ChatService,
    },
};

pub static CHAT_TAG: &str = "chat";

/// Post a message to a party's chat room
#[utoipa::path(
    post,
    path = "/api/parties/{party_id}/chat",
    tag = CHAT_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    request_body = ChatMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = ChatMessageResponse),
        (status = 404, description = "User or party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let message = ChatService::new(&state.db, &state.clock)
        .send_message(party_id, request, &caller)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// A party's chat history, oldest first
#[utoipa::path(
    get,
    path = "/api/parties/{party_id}/chat",
    tag = CHAT_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Messages in send order", body = Vec<ChatMessageResponse>),
        (status = 404, description = "User or party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chat_history(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let messages = ChatService::new(&state.db, &state.clock)
        .get_chat_history(party_id)
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}

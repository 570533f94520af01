use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::chat_message::MessageType;
use marketparty::{
    model::chat::ChatMessageRequest,
    server::controller::chat::{get_chat_history, send_message},
};

use super::*;

/// Expect 201 Created for a message to an existing party
#[tokio::test]
async fn send_message_created() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = send_message(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        Json(ChatMessageRequest {
            message_type: MessageType::Talk,
            content: "Meet at the north gate".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 Not Found when sending to a party that does not exist
#[tokio::test]
async fn send_message_not_found_for_unknown_party() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let result = send_message(
        State(test.to_app_state()),
        test.session.clone(),
        Path(42),
        Json(ChatMessageRequest {
            message_type: MessageType::Enter,
            content: String::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK for the history of a party with messages
#[tokio::test]
async fn get_chat_history_ok() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_message(party.id, "leader@example.com", "Hello", 0)
        .await?;
    sign_in(&test, 2).await;

    let result =
        get_chat_history(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for history without a session user
#[tokio::test]
async fn get_chat_history_not_found_without_session_user() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;

    let result =
        get_chat_history(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

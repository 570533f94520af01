use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::{party::PartyStatus, party_member::InviteStatus};
use marketparty::server::controller::party_member::request_join;

use super::*;

/// Expect 201 Created for a first request to a recruiting party
#[tokio::test]
async fn created_for_recruiting_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 2).await;

    let result = request_join(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the caller already asked to join
#[tokio::test]
async fn conflict_for_duplicate_request() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    sign_in(&test, 2).await;

    let result = request_join(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 Conflict when the party is full
#[tokio::test]
async fn conflict_for_joined_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 2).await?;
    let party = test.party().set_status(party, PartyStatus::Joined).await?;
    sign_in(&test, 3).await;

    let result = request_join(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 Not Found for a party that does not exist
#[tokio::test]
async fn not_found_for_unknown_party() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 2).await;

    let result = request_join(
        State(test.to_app_state()),
        test.session.clone(),
        Path(42),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

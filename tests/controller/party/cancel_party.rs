use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::party::PartyStatus;
use marketparty::server::controller::party::cancel_party;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 OK and a CANCELED party when the leader cancels it
#[tokio::test]
async fn ok_for_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = cancel_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Party::find_by_id(party.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, PartyStatus::Canceled);

    Ok(())
}

/// Expect 200 OK when canceling a party that is already done
#[tokio::test]
async fn ok_for_done_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    let party = test.party().set_status(party, PartyStatus::Done).await?;
    sign_in(&test, 1).await;

    let result = cancel_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden when a non-member tries to cancel
#[tokio::test]
async fn forbidden_for_stranger() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 3).await;

    let result = cancel_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

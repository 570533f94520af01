use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::party::PartyStatus;
use marketparty::server::controller::party::complete_party;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 OK and a DONE party when the leader completes it
#[tokio::test]
async fn ok_for_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = complete_party(
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
    assert_eq!(stored.status, PartyStatus::Done);

    Ok(())
}

/// Expect 403 Forbidden and an unchanged party when a member tries to complete it
#[tokio::test]
async fn forbidden_for_accepted_member() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, entity::party_member::InviteStatus::Accepted)
        .await?;
    sign_in(&test, 2).await;

    let result = complete_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    let stored = entity::prelude::Party::find_by_id(party.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, PartyStatus::Recruiting);

    Ok(())
}

/// Expect 403 Forbidden for a party that does not exist
#[tokio::test]
async fn forbidden_for_unknown_party() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let result = complete_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(42),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

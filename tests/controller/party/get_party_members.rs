use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::{party::PartyStatus, party_member::InviteStatus};
use marketparty::server::controller::party::get_party_members;

use super::*;

/// Expect 200 OK for the leader of a finished party
#[tokio::test]
async fn ok_for_leader_of_done_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 2).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Accepted)
        .await?;
    let party = test.party().set_status(party, PartyStatus::Done).await?;
    sign_in(&test, 1).await;

    let result =
        get_party_members(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 409 Conflict while the party is still recruiting
#[tokio::test]
async fn conflict_for_recruiting_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 2).await?;
    sign_in(&test, 1).await;

    let result =
        get_party_members(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 403 Forbidden for a member who is not the leader
#[tokio::test]
async fn forbidden_for_member() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 2).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Accepted)
        .await?;
    let party = test.party().set_status(party, PartyStatus::Done).await?;
    sign_in(&test, 2).await;

    let result =
        get_party_members(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::{party::PartyStatus, party_member::InviteStatus};
use marketparty::{
    model::member::PartyMemberUpdateRequest,
    server::controller::party_member::handle_join_request,
};
use sea_orm::EntityTrait;

use super::*;

fn decision(user_id: i32, invite_status: InviteStatus) -> Json<PartyMemberUpdateRequest> {
    Json(PartyMemberUpdateRequest {
        user_id: Some(user_id),
        invite_status: Some(invite_status),
    })
}

/// Expect 200 OK and a JOINED party once the last seat is accepted
#[tokio::test]
async fn ok_and_joined_when_target_reached() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 2).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    sign_in(&test, 1).await;

    let result = handle_join_request(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        decision(2, InviteStatus::Accepted),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["party_status"], "JOINED");

    let stored = entity::prelude::Party::find_by_id(party.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, PartyStatus::Joined);

    Ok(())
}

/// Expect 403 Forbidden when a member decides on another request
#[tokio::test]
async fn forbidden_for_non_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Accepted)
        .await?;
    test.party()
        .insert_member(party.id, 3, InviteStatus::Pending)
        .await?;
    sign_in(&test, 2).await;

    let result = handle_join_request(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        decision(3, InviteStatus::Accepted),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 Not Found for a user who never asked to join
#[tokio::test]
async fn not_found_for_unknown_membership() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = handle_join_request(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        decision(3, InviteStatus::Accepted),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 Conflict for a decision on a canceled party
#[tokio::test]
async fn conflict_for_canceled_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    let party = test.party().set_status(party, PartyStatus::Canceled).await?;
    sign_in(&test, 1).await;

    let result = handle_join_request(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        decision(2, InviteStatus::Accepted),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::CONFLICT);

    Ok(())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::party_member::InviteStatus;
use marketparty::server::controller::party_member::get_join_requests;

use super::*;

/// Expect 200 OK for the leader
#[tokio::test]
async fn ok_for_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    sign_in(&test, 1).await;

    let result =
        get_join_requests(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden for a pending member peeking at other requests
#[tokio::test]
async fn forbidden_for_requester() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    sign_in(&test, 2).await;

    let result =
        get_join_requests(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

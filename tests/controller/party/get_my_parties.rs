use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::party_member::InviteStatus;
use marketparty::server::controller::party::get_my_parties;

use super::*;

/// Expect 200 OK for a user who leads one party and joined another
#[tokio::test]
async fn ok_for_leader_and_member() -> Result<(), TestError> {
    let test = setup().await?;
    test.party().insert_party(1, 1, 3).await?;
    let other = test.party().insert_party(2, 1, 3).await?;
    test.party()
        .insert_member(other.id, 1, InviteStatus::Accepted)
        .await?;
    sign_in(&test, 1).await;

    let result = get_my_parties(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let parties = body.as_array().unwrap();
    assert_eq!(parties.len(), 2);
    assert_eq!(parties[0]["role"], "Leader");
    assert_eq!(parties[1]["role"], "Member");

    Ok(())
}

/// Expect 200 OK with nothing to list for a new user
#[tokio::test]
async fn ok_for_user_without_parties() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 3).await;

    let result = get_my_parties(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!([]));

    Ok(())
}

/// Expect 404 Not Found when the session user was deleted
#[tokio::test]
async fn not_found_for_missing_user() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 99).await;

    let result = get_my_parties(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a session holding the caller and an application state
//! built from the test context, then the resulting status code is checked.

mod chat;
mod party;
mod party_member;

use marketparty::server::{error::Error, model::session::user::SessionUserId};
use marketparty_test_utils::prelude::*;

/// Leader (ID 1), two other shoppers (IDs 2 and 3) and one item (ID 1).
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_party_tables()
        .with_user("leader@example.com")
        .with_user("first@example.com")
        .with_user("second@example.com")
        .with_item("Napa Cabbage", "VEGETABLE")
        .build()
        .await
}

/// Stores `user_id` as the session's authenticated user.
async fn sign_in(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .unwrap();
}

/// Status code an error renders to.
fn error_status(error: Error) -> axum::http::StatusCode {
    use axum::response::IntoResponse;

    error.into_response().status()
}

/// Decodes a handler response body as JSON.
async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

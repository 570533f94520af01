use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication errors for session-backed endpoints.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// The session references a user that no longer exists.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
        }
    }
}

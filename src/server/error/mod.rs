//! Error types for the marketparty server.
//!
//! Domain errors live in their own modules and each knows how to render itself as an HTTP
//! response. Library errors are wrapped by `Error` and rendered as a generic 500.

pub mod auth;
pub mod config;
pub mod party;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::party::LifecycleError;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, party::PartyError},
};

/// Main error type for the server.
///
/// Aggregates the domain errors and the library errors so handlers and services can
/// propagate everything with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no session user or unknown user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Party workflow error (validation, authorization, state conflicts).
    #[error(transparent)]
    PartyError(#[from] PartyError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0}")]
    ParseError(String),
    /// Internal error indicating a bug, such as a party whose item row is missing.
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Listener bind or serve failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<LifecycleError> for Error {
    fn from(err: LifecycleError) -> Self {
        Self::PartyError(PartyError::from(err))
    }
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation and parse failures
/// - 403 Forbidden - Caller is not the party leader
/// - 404 Not Found - Missing user, party, item, market or membership
/// - 409 Conflict - Operation not allowed in the party's current state
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PartyError(err) => err.into_response(),
            Self::ParseError(message) => {
                tracing::debug!("{}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

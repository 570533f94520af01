use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::party::{LifecycleError, PartyEvent, PartyStatus};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the party, membership, chat and catalog use cases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartyError {
    #[error("Party {0} not found")]
    PartyNotFound(i32),
    #[error("Item {0} not found")]
    ItemNotFound(i32),
    #[error("User {user_id} is not a member of party {party_id}")]
    PartyMemberNotFound { party_id: i32, user_id: i32 },
    #[error("User {0} not found")]
    UserNotFound(i32),
    #[error("Market {market_name:?} at {market_address:?} not found")]
    MarketNotFound {
        market_name: String,
        market_address: String,
    },
    #[error("Item count must be at least 1, got {0}")]
    InvalidItemCount(i32),
    #[error("Party start time must be before its end time")]
    InvalidTimeRange,
    #[error("Members count must be at least 1, got {0}")]
    InvalidMembersCount(i32),
    #[error("User {0} has no registered location")]
    UserLocationMissing(i32),
    #[error("User {user_id} is not the leader of party {party_id}")]
    NotPartyLeader { party_id: i32, user_id: i32 },
    #[error("Party {0} is not done")]
    PartyNotDone(i32),
    #[error("Party {0} is already done or canceled")]
    PartyClosed(i32),
    #[error("Party {0} is no longer recruiting")]
    PartyNotRecruiting(i32),
    #[error("User {user_id} already belongs to party {party_id}")]
    AlreadyPartyMember { party_id: i32, user_id: i32 },
    #[error("Cannot apply {event:?} to a party with status {from:?}")]
    IllegalTransition { from: PartyStatus, event: PartyEvent },
}

impl From<LifecycleError> for PartyError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::InvalidTimeRange => Self::InvalidTimeRange,
            LifecycleError::IllegalTransition { from, event } => {
                Self::IllegalTransition { from, event }
            }
        }
    }
}

impl PartyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PartyNotFound(_)
            | Self::ItemNotFound(_)
            | Self::PartyMemberNotFound { .. }
            | Self::UserNotFound(_)
            | Self::MarketNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidItemCount(_)
            | Self::InvalidTimeRange
            | Self::InvalidMembersCount(_)
            | Self::UserLocationMissing(_) => StatusCode::BAD_REQUEST,
            Self::NotPartyLeader { .. } => StatusCode::FORBIDDEN,
            Self::PartyNotDone(_)
            | Self::PartyClosed(_)
            | Self::PartyNotRecruiting(_)
            | Self::AlreadyPartyMember { .. }
            | Self::IllegalTransition { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for PartyError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

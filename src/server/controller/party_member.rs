use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        member::{PartyMemberResponse, PartyMemberUpdateRequest, PartyStatusResponse},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::{party::PartyService, party_member::PartyMemberService},
    },
};

pub static PARTY_MEMBER_TAG: &str = "party member";

/// Ask to join a recruiting party
#[utoipa::path(
    post,
    path = "/api/parties/{party_id}/join",
    tag = PARTY_MEMBER_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 201, description = "Pending membership created", body = PartyMemberResponse),
        (status = 404, description = "User or party not found", body = ErrorDto),
        (status = 409, description = "Not recruiting or already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_join(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let membership = PartyMemberService::new(&state.db, &state.clock)
        .request_join(party_id, &caller)
        .await?;

    Ok((StatusCode::CREATED, Json(membership)))
}

/// Pending join requests of a party led by the caller
#[utoipa::path(
    get,
    path = "/api/parties/{party_id}/join-requests",
    tag = PARTY_MEMBER_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Pending memberships", body = Vec<PartyMemberResponse>),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_join_requests(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let requests = PartyMemberService::new(&state.db, &state.clock)
        .get_join_requests(party_id, &caller)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Accept or reject a join request
///
/// Both `user_id` and `invite_status` must be present for the decision to apply; with either
/// missing only the party status is recomputed.
#[utoipa::path(
    patch,
    path = "/api/parties/{party_id}/join-requests",
    tag = PARTY_MEMBER_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    request_body = PartyMemberUpdateRequest,
    responses(
        (status = 200, description = "Party status after the decision", body = PartyStatusResponse),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User or membership not found", body = ErrorDto),
        (status = 409, description = "Party is already done or canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handle_join_request(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
    Json(request): Json<PartyMemberUpdateRequest>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let party_status = PartyService::new(&state.db, &state.clock)
        .handle_join_request(party_id, &caller, request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PartyStatusResponse {
            party_id,
            party_status,
        }),
    ))
}

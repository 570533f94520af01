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
        member::PartyMemberResponse,
        party::{
            NearbyPartyResponse, PartyCreateRequest, PartyMembershipResponse, PartyResponse,
            PartyUpdateRequest,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::party::PartyService,
    },
};

pub static PARTY_TAG: &str = "party";

/// Create a party led by the caller
#[utoipa::path(
    post,
    path = "/api/parties",
    tag = PARTY_TAG,
    request_body = PartyCreateRequest,
    responses(
        (status = 201, description = "Party created", body = PartyResponse),
        (status = 400, description = "Invalid party details or time format", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_party(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<PartyCreateRequest>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let party = PartyService::new(&state.db, &state.clock)
        .create_party(request, &caller)
        .await?;

    Ok((StatusCode::CREATED, Json(party)))
}

/// Parties the caller leads or belongs to
#[utoipa::path(
    get,
    path = "/api/parties/my",
    tag = PARTY_TAG,
    responses(
        (status = 200, description = "Led then joined parties", body = Vec<PartyResponse>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_parties(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let parties = PartyService::new(&state.db, &state.clock)
        .get_my_parties(&caller)
        .await?;

    Ok((StatusCode::OK, Json(parties)))
}

/// Open parties near the caller's registered location, nearest first
#[utoipa::path(
    get,
    path = "/api/parties/nearby",
    tag = PARTY_TAG,
    responses(
        (status = 200, description = "Parties within radius", body = Vec<NearbyPartyResponse>),
        (status = 400, description = "User has no registered location", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearby_parties(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let parties = PartyService::new(&state.db, &state.clock)
        .get_nearby_parties(&caller, &state.nearby)
        .await?;

    Ok((StatusCode::OK, Json(parties)))
}

/// Replace a party's item, quantity, time window and target member count
#[utoipa::path(
    put,
    path = "/api/parties/{party_id}",
    tag = PARTY_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    request_body = PartyUpdateRequest,
    responses(
        (status = 200, description = "Party updated", body = PartyResponse),
        (status = 400, description = "Invalid party details or time format", body = ErrorDto),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 409, description = "Party is already done or canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_party(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
    Json(request): Json<PartyUpdateRequest>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;
    let party_service = PartyService::new(&state.db, &state.clock);

    party_service.require_leader(party_id, caller.id).await?;
    let party = party_service
        .update_party(party_id, request, &caller)
        .await?;

    Ok((StatusCode::OK, Json(party)))
}

/// Mark a party as done
#[utoipa::path(
    patch,
    path = "/api/parties/{party_id}/complete",
    tag = PARTY_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Party is done", body = PartyResponse),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_party(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;
    let party_service = PartyService::new(&state.db, &state.clock);

    party_service.require_leader(party_id, caller.id).await?;
    let party = party_service.complete_party(party_id).await?;

    Ok((StatusCode::OK, Json(party)))
}

/// Cancel a party
#[utoipa::path(
    patch,
    path = "/api/parties/{party_id}/cancel",
    tag = PARTY_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Party is canceled", body = PartyResponse),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_party(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;
    let party_service = PartyService::new(&state.db, &state.clock);

    party_service.require_leader(party_id, caller.id).await?;
    let party = party_service.cancel_party(party_id).await?;

    Ok((StatusCode::OK, Json(party)))
}

/// Accepted members of a finished party
#[utoipa::path(
    get,
    path = "/api/parties/{party_id}/members",
    tag = PARTY_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Accepted members", body = Vec<PartyMemberResponse>),
        (status = 403, description = "Caller is not the party leader", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Party is not done", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_party_members(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let members = PartyService::new(&state.db, &state.clock)
        .get_members_after_party_closed(party_id, &caller)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Whether the caller belongs to a party
#[utoipa::path(
    get,
    path = "/api/parties/{party_id}/is-member",
    tag = PARTY_TAG,
    params(("party_id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Membership of the caller", body = PartyMembershipResponse),
        (status = 404, description = "User or party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn is_party_member(
    State(state): State<AppState>,
    session: Session,
    Path(party_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;

    let is_member = PartyService::new(&state.db, &state.clock)
        .is_user_in_party(party_id, &caller)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PartyMembershipResponse {
            party_id,
            is_member,
        }),
    ))
}

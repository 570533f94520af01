use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        market::{MarketLookupParams, MarketResponse},
    },
    server::{
        data::market::MarketRepository,
        error::{party::PartyError, Error},
        model::app::AppState,
    },
};

pub static MARKET_TAG: &str = "market";

/// Look up a market by its name and address
#[utoipa::path(
    get,
    path = "/api/markets/lookup",
    tag = MARKET_TAG,
    params(MarketLookupParams),
    responses(
        (status = 200, description = "Market found", body = MarketResponse),
        (status = 404, description = "No market with that name and address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_market(
    State(state): State<AppState>,
    Query(params): Query<MarketLookupParams>,
) -> Result<impl IntoResponse, Error> {
    let market = MarketRepository::new(&state.db)
        .get_by_name_and_address(&params.market_name, &params.market_address)
        .await?
        .ok_or(PartyError::MarketNotFound {
            market_name: params.market_name,
            market_address: params.market_address,
        })?;

    Ok((StatusCode::OK, Json(MarketResponse::from(market))))
}

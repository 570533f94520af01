//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa path description, and the
//! collected document is served by Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered through a single `routes!` invocation so that
/// their methods merge onto one route.
///
/// # Registered Endpoints
/// - `POST /api/parties` - Create a party
/// - `GET /api/parties/my` - Parties the caller leads or joined
/// - `GET /api/parties/nearby` - Parties near the caller
/// - `PUT /api/parties/{party_id}` - Update a party
/// - `PATCH /api/parties/{party_id}/complete` - Mark a party as done
/// - `PATCH /api/parties/{party_id}/cancel` - Cancel a party
/// - `GET /api/parties/{party_id}/members` - Accepted members of a finished party
/// - `GET /api/parties/{party_id}/is-member` - Caller membership check
/// - `POST /api/parties/{party_id}/join` - Request to join
/// - `GET|PATCH /api/parties/{party_id}/join-requests` - List or decide join requests
/// - `GET|POST /api/parties/{party_id}/chat` - Chat history and new messages
/// - `GET /api/markets/lookup` - Market lookup by name and address
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Marketparty", description = "Marketparty API"), tags(
        (name = controller::party::PARTY_TAG, description = "Party lifecycle routes"),
        (name = controller::party_member::PARTY_MEMBER_TAG, description = "Join request routes"),
        (name = controller::chat::CHAT_TAG, description = "Party chat routes"),
        (name = controller::market::MARKET_TAG, description = "Market lookup routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::party::create_party))
        .routes(routes!(controller::party::get_my_parties))
        .routes(routes!(controller::party::get_nearby_parties))
        .routes(routes!(controller::party::update_party))
        .routes(routes!(controller::party::complete_party))
        .routes(routes!(controller::party::cancel_party))
        .routes(routes!(controller::party::get_party_members))
        .routes(routes!(controller::party::is_party_member))
        .routes(routes!(controller::party_member::request_join))
        .routes(routes!(
            controller::party_member::get_join_requests,
            controller::party_member::handle_join_request
        ))
        .routes(routes!(
            controller::chat::send_message,
            controller::chat::get_chat_history
        ))
        .routes(routes!(controller::market::lookup_market))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

use std::sync::Arc;

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, error::AppError, state::AppState};

#[derive(OpenApi)]
#[openapi(info(
    title = "leagueboard",
    description = "Sports league management API: standings, matches, player bidding, and admin tooling."
))]
struct ApiDoc;

/// Builds the API router and its OpenAPI document.
///
/// Swagger UI is served at `/swagger-ui`; every route is rate limited and
/// CORS-enabled.
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(20)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limiter configuration".to_string()))?;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::season::get_seasons,
            controller::season::create_season
        ))
        .routes(routes!(controller::standings::get_standings))
        .routes(routes!(controller::standings::get_standings_by_conference))
        .routes(routes!(controller::matches::get_matches))
        .routes(routes!(controller::matches::create_match))
        .routes(routes!(controller::matches::report_score))
        .routes(routes!(
            controller::team::get_teams,
            controller::team::create_team
        ))
        .routes(routes!(
            controller::team::get_team,
            controller::team::update_team,
            controller::team::delete_team
        ))
        .routes(routes!(
            controller::player::get_players,
            controller::player::create_player
        ))
        .routes(routes!(controller::bid::get_player_bids))
        .routes(routes!(controller::bid::place_bid))
        .routes(routes!(controller::bid::cancel_bid))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::set_user_role))
        .routes(routes!(controller::settlement::run_settlement))
        .split_for_parts();

    Ok(router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .layer(CorsLayer::permissive()))
}

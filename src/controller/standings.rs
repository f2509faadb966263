use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    domain::role::Permission,
    dto::standings::{GroupedStandingsDto, StandingsDto},
    error::AppError,
    middleware::auth::AuthGuard,
    service::standings::StandingsService,
    state::AppState,
};

/// GET /api/seasons/{season_id}/standings
/// Ranked standings for a season
#[utoipa::path(
    get,
    path = "/api/seasons/{season_id}/standings",
    params(("season_id" = i32, Path, description = "Season id")),
    responses(
        (status = 200, description = "Ranked standings", body = StandingsDto),
        (status = 404, description = "Season not found")
    )
)]
pub async fn get_standings(
    State(state): State<AppState>,
    session: Session,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let standings = StandingsService::new(&state.db, state.standings)
        .season_standings(season_id)
        .await?;

    Ok((StatusCode::OK, Json(standings)))
}

/// GET /api/seasons/{season_id}/standings/conferences
/// Standings grouped by conference
#[utoipa::path(
    get,
    path = "/api/seasons/{season_id}/standings/conferences",
    params(("season_id" = i32, Path, description = "Season id")),
    responses(
        (status = 200, description = "Grouped standings", body = GroupedStandingsDto),
        (status = 404, description = "Season not found")
    )
)]
pub async fn get_standings_by_conference(
    State(state): State<AppState>,
    session: Session,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let standings = StandingsService::new(&state.db, state.standings)
        .season_standings_by_conference(season_id)
        .await?;

    Ok((StatusCode::OK, Json(standings)))
}

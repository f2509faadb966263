use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::PaginationQuery,
    domain::role::Permission,
    dto::matches::{CreateMatchDto, MatchDto, PaginatedMatchesDto, ReportScoreDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::matches::{CreateMatchParams, ReportScoreParams},
    service::matches::MatchService,
    state::AppState,
};

/// GET /api/seasons/{season_id}/matches
/// Paginated matches for a season
#[utoipa::path(
    get,
    path = "/api/seasons/{season_id}/matches",
    params(("season_id" = i32, Path, description = "Season id"), PaginationQuery),
    responses(
        (status = 200, description = "Matches", body = PaginatedMatchesDto),
        (status = 404, description = "Season not found")
    )
)]
pub async fn get_matches(
    State(state): State<AppState>,
    session: Session,
    Path(season_id): Path<i32>,
    pagination: Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let (matches, total) = MatchService::new(&state.db)
        .paginated_by_season(season_id, pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedMatchesDto {
            matches: matches.into_iter().map(Into::into).collect(),
            total,
        }),
    ))
}

/// POST /api/matches
/// Schedule a match
#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match scheduled", body = MatchDto),
        (status = 400, description = "Invalid match")
    )
)]
pub async fn create_match(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeague])
        .await?;

    let created = MatchService::new(&state.db)
        .create(CreateMatchParams {
            season_id: dto.season_id,
            home_team_id: dto.home_team_id,
            away_team_id: dto.away_team_id,
            scheduled_at: dto.scheduled_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MatchDto::from(created))))
}

/// PUT /api/matches/{id}/score
/// Report a final score
#[utoipa::path(
    put,
    path = "/api/matches/{id}/score",
    params(("id" = i32, Path, description = "Match id")),
    request_body = ReportScoreDto,
    responses(
        (status = 200, description = "Score recorded", body = MatchDto),
        (status = 400, description = "Invalid score or result already recorded"),
        (status = 404, description = "Match not found")
    )
)]
pub async fn report_score(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<ReportScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageTeam])
        .await?;

    let completed = MatchService::new(&state.db)
        .report_score(ReportScoreParams {
            id,
            home_score: dto.home_score,
            away_score: dto.away_score,
            overtime: dto.overtime,
        })
        .await?;

    Ok((StatusCode::OK, Json(MatchDto::from(completed))))
}

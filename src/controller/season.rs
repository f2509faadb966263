use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    domain::role::Permission,
    dto::season::{CreateSeasonDto, SeasonDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::season::CreateSeasonParams,
    service::season::SeasonService,
    state::AppState,
};

/// GET /api/seasons
/// List seasons, newest first
#[utoipa::path(
    get,
    path = "/api/seasons",
    responses((status = 200, description = "Seasons", body = [SeasonDto]))
)]
pub async fn get_seasons(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let seasons = SeasonService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(seasons.into_iter().map(SeasonDto::from).collect::<Vec<_>>()),
    ))
}

/// POST /api/seasons
/// Create a season
#[utoipa::path(
    post,
    path = "/api/seasons",
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Season created", body = SeasonDto),
        (status = 400, description = "Invalid season")
    )
)]
pub async fn create_season(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeague])
        .await?;

    let season = SeasonService::new(&state.db)
        .create(CreateSeasonParams { name: dto.name })
        .await?;

    Ok((StatusCode::CREATED, Json(SeasonDto::from(season))))
}

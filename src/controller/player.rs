use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    domain::role::Permission,
    dto::player::{CreatePlayerDto, PlayerDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::player::CreatePlayerParams,
    service::player::PlayerService,
    state::AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct PlayerListParams {
    /// Restrict the listing to one team's roster.
    pub team_id: Option<i32>,
}

/// GET /api/players
/// List players, optionally for one team
#[utoipa::path(
    get,
    path = "/api/players",
    params(PlayerListParams),
    responses(
        (status = 200, description = "Players", body = [PlayerDto]),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_players(
    State(state): State<AppState>,
    session: Session,
    params: Query<PlayerListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let players = PlayerService::new(&state.db).list(params.team_id).await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(PlayerDto::from).collect::<Vec<_>>()),
    ))
}

/// POST /api/players
/// Create a player
#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 404, description = "Team not found")
    )
)]
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeague])
        .await?;

    let player = PlayerService::new(&state.db)
        .create(CreatePlayerParams {
            name: dto.name,
            team_id: dto.team_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PlayerDto::from(player))))
}

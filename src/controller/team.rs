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
    dto::team::{CreateTeamDto, PaginatedTeamsDto, TeamDto, UpdateTeamDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::team::{CreateTeamParams, UpdateTeamParams},
    service::team::TeamService,
    state::AppState,
};

/// GET /api/teams
/// Paginated team list
#[utoipa::path(
    get,
    path = "/api/teams",
    params(PaginationQuery),
    responses((status = 200, description = "Teams", body = PaginatedTeamsDto))
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
    pagination: Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let (teams, total) = TeamService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedTeamsDto {
            teams: teams.into_iter().map(Into::into).collect(),
            total,
        }),
    ))
}

/// GET /api/teams/{id}
/// Single team
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

/// POST /api/teams
/// Create a team
#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 403, description = "Missing permission")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeague])
        .await?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams {
            name: dto.name,
            logo_url: dto.logo_url,
            conference_id: dto.conference_id,
            budget: dto.budget,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from(team))))
}

/// PUT /api/teams/{id}
/// Update a team
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(("id" = i32, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageTeam])
        .await?;

    let team = TeamService::new(&state.db)
        .update(UpdateTeamParams {
            id,
            name: dto.name,
            logo_url: dto.logo_url,
            conference_id: dto.conference_id,
            budget: dto.budget,
        })
        .await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

/// DELETE /api/teams/{id}
/// Delete a team
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageLeague])
        .await?;

    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

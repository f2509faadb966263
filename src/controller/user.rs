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
    dto::user::{PaginatedUsersDto, UpdateUserRoleDto, UserDto},
    error::AppError,
    middleware::auth::AuthGuard,
    service::user::UserService,
    state::AppState,
};

/// GET /api/users
/// Paginated user list
#[utoipa::path(
    get,
    path = "/api/users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Users", body = PaginatedUsersDto),
        (status = 403, description = "Missing permission")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    pagination: Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let (users, total) = UserService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedUsersDto {
            users: users.into_iter().map(Into::into).collect(),
            total,
        }),
    ))
}

/// PUT /api/users/{id}/role
/// Set a user's role
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Unknown role"),
        (status = 404, description = "User not found")
    )
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let user = UserService::new(&state.db).set_role(id, &dto.role).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

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
    dto::user::UserDto,
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    service::auth::AuthService,
    state::AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct LoginParams {
    /// One-time admin bootstrap code from the startup log.
    pub code: String,
}

/// GET /api/auth/login
/// Redeem an admin bootstrap code and open a session
#[utoipa::path(
    get,
    path = "/api/auth/login",
    params(LoginParams),
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid or expired code")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    params: Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.admin_code_service);

    let user = auth_service.login_with_code(&params.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// GET /api/auth/logout
/// End the current session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    responses((status = 204, description = "Logged out"))
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

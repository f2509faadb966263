use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    domain::role::Permission,
    dto::settlement::SettlementReportDto,
    error::AppError,
    middleware::auth::AuthGuard,
    service::settlement::SettlementService,
    state::AppState,
};

/// POST /api/admin/settlement/run
/// Trigger a settlement pass immediately
#[utoipa::path(
    post,
    path = "/api/admin/settlement/run",
    responses(
        (status = 200, description = "Settlement report", body = SettlementReportDto),
        (status = 403, description = "Missing permission")
    )
)]
pub async fn run_settlement(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let report = SettlementService::new(&state.db).run(Utc::now()).await?;

    Ok((StatusCode::OK, Json(SettlementReportDto::from(report))))
}

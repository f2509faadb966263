use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    domain::role::Permission,
    dto::bid::{BidDto, PlaceBidDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::bid::PlaceBidParams,
    service::bid::BidService,
    state::AppState,
};

/// GET /api/players/{player_id}/bids
/// Active bids on a player, highest first
#[utoipa::path(
    get,
    path = "/api/players/{player_id}/bids",
    params(("player_id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Active bids", body = [BidDto]),
        (status = 404, description = "Player not found")
    )
)]
pub async fn get_player_bids(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewLeague])
        .await?;

    let bids = BidService::new(&state.db).active_bids(player_id).await?;

    Ok((
        StatusCode::OK,
        Json(bids.into_iter().map(BidDto::from).collect::<Vec<_>>()),
    ))
}

/// POST /api/bids
/// Place a bid on a player
#[utoipa::path(
    post,
    path = "/api/bids",
    request_body = PlaceBidDto,
    responses(
        (status = 201, description = "Bid placed", body = BidDto),
        (status = 400, description = "Invalid bid"),
        (status = 404, description = "Player or team not found")
    )
)]
pub async fn place_bid(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBid])
        .await?;

    let bid = BidService::new(&state.db)
        .place_bid(PlaceBidParams {
            player_id: dto.player_id,
            team_id: dto.team_id,
            amount: dto.amount,
            expires_at: dto.expires_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BidDto::from(bid))))
}

/// POST /api/bids/{id}/cancel
/// Cancel an active bid
#[utoipa::path(
    post,
    path = "/api/bids/{id}/cancel",
    params(("id" = i32, Path, description = "Bid id")),
    responses(
        (status = 204, description = "Bid cancelled"),
        (status = 400, description = "Bid is no longer active"),
        (status = 404, description = "Bid not found")
    )
)]
pub async fn cancel_bid(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBid])
        .await?;

    BidService::new(&state.db).cancel_bid(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

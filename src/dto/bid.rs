use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::settlement::BidRecord;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BidDto {
    pub id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub amount: i64,
    pub expires_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<BidRecord> for BidDto {
    fn from(bid: BidRecord) -> Self {
        Self {
            id: bid.id,
            player_id: bid.player_id,
            team_id: bid.team_id,
            amount: bid.amount,
            expires_at: bid.expires_at,
            status: bid.status.as_str().to_string(),
            created_at: bid.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlaceBidDto {
    pub player_id: i32,
    pub team_id: i32,
    pub amount: i64,
    pub expires_at: DateTime<Utc>,
}

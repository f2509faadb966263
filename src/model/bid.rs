use chrono::{DateTime, Utc};

use crate::domain::settlement::{BidRecord, ParseBidStatusError};

impl BidRecord {
    /// Converts an entity model to a bid snapshot at the repository boundary.
    /// Fails if the stored status string is not a known status.
    pub fn from_entity(entity: entity::bid::Model) -> Result<Self, ParseBidStatusError> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            team_id: entity.team_id,
            amount: entity.amount,
            expires_at: entity.expires_at,
            status: entity.status.parse()?,
            finalized: entity.finalized,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for placing a new bid on a player.
#[derive(Debug, Clone)]
pub struct PlaceBidParams {
    pub player_id: i32,
    pub team_id: i32,
    pub amount: i64,
    pub expires_at: DateTime<Utc>,
}

//! Bid service.
//!
//! Validates and records bids placed on players. Settlement of expired bids
//! lives in the settlement service; this service only covers the active
//! lifecycle (placing and cancelling).

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    data::{bid::BidRepository, player::PlayerRepository, team::TeamRepository},
    domain::settlement::BidRecord,
    error::AppError,
    model::bid::PlaceBidParams,
};

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a bid on a player.
    ///
    /// Validates that the amount is positive, the expiry lies in the future,
    /// the player exists, and the bidding team exists with a budget covering
    /// the amount.
    ///
    /// # Returns
    /// - `Ok(BidRecord)`: The recorded bid
    /// - `Err(AppError::BadRequest)`: Validation failure
    /// - `Err(AppError::NotFound)`: Unknown player or team
    pub async fn place_bid(&self, params: PlaceBidParams) -> Result<BidRecord, AppError> {
        if params.amount <= 0 {
            return Err(AppError::BadRequest(
                "Bid amount must be positive".to_string(),
            ));
        }
        if params.expires_at <= Utc::now() {
            return Err(AppError::BadRequest(
                "Bid expiry must be in the future".to_string(),
            ));
        }

        PlayerRepository::new(self.db)
            .get_by_id(params.player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let team = TeamRepository::new(self.db)
            .get_by_id(params.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        if team.budget < params.amount {
            return Err(AppError::BadRequest(
                "Team budget cannot cover the bid amount".to_string(),
            ));
        }

        let bid = BidRepository::new(self.db).create(params).await?;

        BidRecord::from_entity(bid)
            .map_err(|err| AppError::InternalError(format!("Created bid failed to parse: {err}")))
    }

    /// Lists a player's active bids, highest amount first.
    ///
    /// Rows with unrecognized status strings are skipped.
    pub async fn active_bids(&self, player_id: i32) -> Result<Vec<BidRecord>, AppError> {
        PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        let rows = BidRepository::new(self.db)
            .get_active_by_player(player_id)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match BidRecord::from_entity(row) {
                    Ok(bid) => Some(bid),
                    Err(err) => {
                        warn!("Skipping bid {}: {}", id, err);
                        None
                    }
                }
            })
            .collect())
    }

    /// Cancels an active bid.
    ///
    /// Cancellation is terminal: the conditional update refuses to touch a
    /// bid that has already left `active`.
    ///
    /// # Returns
    /// - `Ok(())`: Bid cancelled
    /// - `Err(AppError::NotFound)`: No such bid
    /// - `Err(AppError::BadRequest)`: Bid already settled, outbid, or cancelled
    pub async fn cancel_bid(&self, id: i32) -> Result<(), AppError> {
        let repo = BidRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bid not found".to_string()))?;

        let cancelled = repo.cancel(id).await?;
        if cancelled == 0 {
            return Err(AppError::BadRequest(
                "Bid is no longer active".to_string(),
            ));
        }

        Ok(())
    }
}

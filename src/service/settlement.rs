//! Settlement service.
//!
//! Runs the expired-bid resolution pass against the database. The service is
//! the store implementation the resolution writes through: the transfer
//! commit claims the winning bid with a conditional update inside a single
//! transaction, so concurrent passes racing on the same player cannot
//! double-award it — the losing run's output is discarded as advisory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::{
        bid::BidRepository, notification::NotificationRepository, player::PlayerRepository,
        team::TeamRepository,
    },
    domain::settlement::{
        resolve_expired_bids, BidRecord, BidResolution, SettlementError, SettlementReport,
        SettlementStore,
    },
    error::AppError,
};

pub struct SettlementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettlementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one settlement pass over every bid due at `now`.
    ///
    /// Bid rows that fail boundary validation are dropped and added to the
    /// report's skip count. The pass is safe to re-invoke on a schedule:
    /// already-finalized bids never reach the resolution again.
    ///
    /// # Returns
    /// - `Ok(SettlementReport)`: Per-player outcomes, errors, and skip counts
    /// - `Err(AppError)`: Database error while loading the due bids
    pub async fn run(&self, now: DateTime<Utc>) -> Result<SettlementReport, AppError> {
        let rows = BidRepository::new(self.db).get_due_for_settlement(now).await?;
        let total_rows = rows.len();

        let bids: Vec<BidRecord> = rows
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
            .collect();
        let skipped_rows = total_rows - bids.len();

        let mut report = resolve_expired_bids(&bids, now, self).await;
        report.skipped_bids += skipped_rows;

        if report.players_processed > 0 || !report.errors.is_empty() {
            info!(
                "Settlement pass finished: {} players settled, {} errors, {} bids skipped",
                report.players_processed,
                report.errors.len(),
                report.skipped_bids
            );
        }

        Ok(report)
    }
}

fn store_err(err: sea_orm::DbErr) -> SettlementError {
    SettlementError::Store(err.to_string())
}

#[async_trait]
impl SettlementStore for SettlementService<'_> {
    /// Commits a player transfer atomically.
    ///
    /// Claims the winning bid first — a conditional update on `finalized =
    /// false` — then charges the team budget and moves the player, all in one
    /// transaction. Any failure rolls the whole commit back, leaving the
    /// player's bid group untouched for the next pass.
    async fn commit_transfer(
        &self,
        player_id: i32,
        team_id: i32,
        amount: i64,
    ) -> Result<(), SettlementError> {
        let txn = self.db.begin().await.map_err(store_err)?;

        let claimed = BidRepository::new(&txn)
            .finalize_winner(player_id, team_id, amount)
            .await
            .map_err(store_err)?;
        if claimed == 0 {
            txn.rollback().await.map_err(store_err)?;
            return Err(SettlementError::LostSettlementRace(player_id));
        }

        let charged = TeamRepository::new(&txn)
            .charge_budget(team_id, amount)
            .await
            .map_err(store_err)?;
        if charged == 0 {
            let team = TeamRepository::new(&txn)
                .get_by_id(team_id)
                .await
                .map_err(store_err)?;
            txn.rollback().await.map_err(store_err)?;
            return Err(match team {
                Some(team) => SettlementError::InsufficientBudget {
                    team_id,
                    budget: team.budget,
                    amount,
                },
                None => SettlementError::TeamNotFound(team_id),
            });
        }

        let moved = PlayerRepository::new(&txn)
            .assign_team(player_id, team_id)
            .await
            .map_err(store_err)?;
        if moved == 0 {
            txn.rollback().await.map_err(store_err)?;
            return Err(SettlementError::PlayerNotFound(player_id));
        }

        txn.commit().await.map_err(store_err)
    }

    async fn finalize_losing_bids(
        &self,
        resolution: &BidResolution,
    ) -> Result<(), SettlementError> {
        BidRepository::new(self.db)
            .mark_outbid(&resolution.losing_bid_ids)
            .await
            .map_err(store_err)?;

        Ok(())
    }

    async fn notify_winner(&self, resolution: &BidResolution) -> Result<(), SettlementError> {
        let team_name = TeamRepository::new(self.db)
            .get_by_id(resolution.winning_team_id)
            .await
            .map_err(store_err)?
            .map(|team| team.name)
            .unwrap_or_else(|| format!("team {}", resolution.winning_team_id));

        NotificationRepository::new(self.db)
            .create(
                resolution.player_id,
                format!(
                    "You have been transferred to {} on a winning bid of {}",
                    team_name, resolution.amount
                ),
            )
            .await
            .map_err(store_err)?;

        Ok(())
    }
}

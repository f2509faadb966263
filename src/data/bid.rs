//! Bid data repository.
//!
//! Besides plain CRUD, this repository carries the conditional updates the
//! settlement pass relies on: finalizing a winner only while it is still
//! unfinalized, and moving losing or cancelled bids out of `active` without
//! ever touching a terminal row. Callers check the affected-row counts to
//! detect lost races.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::settlement::BidStatus;
use crate::model::bid::PlaceBidParams;

pub struct BidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BidRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Places a new bid in `active` status.
    ///
    /// # Arguments
    /// - `params`: Player, bidding team, amount, and expiry
    ///
    /// # Returns
    /// - `Ok(Model)`: The created bid
    /// - `Err(DbErr)`: Database error (including unknown player or team ids)
    pub async fn create(&self, params: PlaceBidParams) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            player_id: ActiveValue::Set(params.player_id),
            team_id: ActiveValue::Set(params.team_id),
            amount: ActiveValue::Set(params.amount),
            expires_at: ActiveValue::Set(params.expires_at),
            status: ActiveValue::Set(BidStatus::Active.as_str().to_string()),
            finalized: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a bid by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find_by_id(id).one(self.db).await
    }

    /// Gets all active bids for a player, highest amount first.
    pub async fn get_active_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(entity::bid::Column::PlayerId.eq(player_id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .order_by_desc(entity::bid::Column::Amount)
            .order_by_asc(entity::bid::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every bid due for settlement: expired, still active, and not
    /// finalized. Ordered by id for deterministic processing.
    ///
    /// # Arguments
    /// - `now`: Settlement pass timestamp; bids expiring exactly now are due
    pub async fn get_due_for_settlement(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(entity::bid::Column::ExpiresAt.lte(now))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .filter(entity::bid::Column::Finalized.eq(false))
            .order_by_asc(entity::bid::Column::Id)
            .all(self.db)
            .await
    }

    /// Finalizes the winning bid of a settled player.
    ///
    /// The update is conditional on the bid still being active and
    /// unfinalized, which is the guard against two settlement runs awarding
    /// the same player twice: the run whose update affects zero rows lost the
    /// race and must discard its result.
    ///
    /// # Arguments
    /// - `player_id` / `team_id` / `amount`: Identify the winning bid
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of bids finalized (0 means the race was lost)
    /// - `Err(DbErr)`: Database error
    pub async fn finalize_winner(
        &self,
        player_id: i32,
        team_id: i32,
        amount: i64,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::update_many()
            .col_expr(
                entity::bid::Column::Status,
                Expr::value(BidStatus::Finalized.as_str()),
            )
            .col_expr(entity::bid::Column::Finalized, Expr::value(true))
            .filter(entity::bid::Column::PlayerId.eq(player_id))
            .filter(entity::bid::Column::TeamId.eq(team_id))
            .filter(entity::bid::Column::Amount.eq(amount))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .filter(entity::bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks the given bids as outbid and finalized.
    ///
    /// Bids already in a terminal state are left untouched.
    pub async fn mark_outbid(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Bid::update_many()
            .col_expr(
                entity::bid::Column::Status,
                Expr::value(BidStatus::Outbid.as_str()),
            )
            .col_expr(entity::bid::Column::Finalized, Expr::value(true))
            .filter(entity::bid::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .filter(entity::bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels a bid while it is still active.
    ///
    /// # Returns
    /// - `Ok(1)`: Bid cancelled
    /// - `Ok(0)`: Bid missing or already in a terminal state
    /// - `Err(DbErr)`: Database error
    pub async fn cancel(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::update_many()
            .col_expr(
                entity::bid::Column::Status,
                Expr::value(BidStatus::Cancelled.as_str()),
            )
            .col_expr(entity::bid::Column::Finalized, Expr::value(true))
            .filter(entity::bid::Column::Id.eq(id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .filter(entity::bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

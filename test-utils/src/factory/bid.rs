//! Bid factory for creating test bid entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bids with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bid::BidFactory;
///
/// let bid = BidFactory::new(&db, player.id, team.id)
///     .amount(750_000)
///     .expires_at(Utc::now() - chrono::Duration::minutes(1))
///     .build()
///     .await?;
/// ```
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    team_id: i32,
    amount: i64,
    expires_at: chrono::DateTime<Utc>,
    status: String,
    finalized: bool,
}

impl<'a> BidFactory<'a> {
    /// Creates a new BidFactory with default values.
    ///
    /// Defaults:
    /// - amount: `500_000`
    /// - expires_at: 1 hour from now
    /// - status: `"active"`
    /// - finalized: `false`
    pub fn new(db: &'a DatabaseConnection, player_id: i32, team_id: i32) -> Self {
        Self {
            db,
            player_id,
            team_id,
            amount: 500_000,
            expires_at: Utc::now() + chrono::Duration::hours(1),
            status: "active".to_string(),
            finalized: false,
        }
    }

    /// Sets the bid amount.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the expiry timestamp.
    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets the status string stored on the bid row.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the finalized flag.
    pub fn finalized(mut self, finalized: bool) -> Self {
        self.finalized = finalized;
        self
    }

    /// Builds and inserts the bid entity into the database.
    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            team_id: ActiveValue::Set(self.team_id),
            amount: ActiveValue::Set(self.amount),
            expires_at: ActiveValue::Set(self.expires_at),
            status: ActiveValue::Set(self.status),
            finalized: ActiveValue::Set(self.finalized),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active bid with default values.
pub async fn create_bid(
    db: &DatabaseConnection,
    player_id: i32,
    team_id: i32,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, player_id, team_id).build().await
}

/// Creates an active bid that expired a minute ago, ready for settlement.
pub async fn create_expired_bid(
    db: &DatabaseConnection,
    player_id: i32,
    team_id: i32,
    amount: i64,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, player_id, team_id)
        .amount(amount)
        .expires_at(Utc::now() - chrono::Duration::minutes(1))
        .build()
        .await
}

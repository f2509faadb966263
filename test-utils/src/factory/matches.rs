//! Match factory for creating test match entities.
//!
//! Supports both freshly scheduled matches and already-completed matches
//! with a final score, which is what standings tests mostly need.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::matches::MatchFactory;
///
/// let m = MatchFactory::new(&db, season.id, home.id, away.id)
///     .completed(3, 1)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: String,
    overtime: bool,
    scheduled_at: chrono::DateTime<Utc>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - status: `"scheduled"` with no scores
    /// - overtime: `false`
    /// - scheduled_at: 1 hour from now
    pub fn new(
        db: &'a DatabaseConnection,
        season_id: i32,
        home_team_id: i32,
        away_team_id: i32,
    ) -> Self {
        Self {
            db,
            season_id,
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            status: "scheduled".to_string(),
            overtime: false,
            scheduled_at: Utc::now() + chrono::Duration::hours(1),
        }
    }

    /// Marks the match as completed with the given final score.
    pub fn completed(mut self, home_score: i32, away_score: i32) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = "completed".to_string();
        self
    }

    /// Sets the overtime flag.
    pub fn overtime(mut self, overtime: bool) -> Self {
        self.overtime = overtime;
        self
    }

    /// Sets the status string stored on the match row.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the scheduled time.
    pub fn scheduled_at(mut self, scheduled_at: chrono::DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            id: ActiveValue::NotSet,
            season_id: ActiveValue::Set(self.season_id),
            home_team_id: ActiveValue::Set(self.home_team_id),
            away_team_id: ActiveValue::Set(self.away_team_id),
            home_score: ActiveValue::Set(self.home_score),
            away_score: ActiveValue::Set(self.away_score),
            status: ActiveValue::Set(self.status),
            overtime: ActiveValue::Set(self.overtime),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled match with default values.
pub async fn create_match(
    db: &DatabaseConnection,
    season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, season_id, home_team_id, away_team_id)
        .build()
        .await
}

/// Creates a completed match with the given final score.
pub async fn create_completed_match(
    db: &DatabaseConnection,
    season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    home_score: i32,
    away_score: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, season_id, home_team_id, away_team_id)
        .completed(home_score, away_score)
        .build()
        .await
}

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::matches::{CreateMatchParams, MatchStatus, ReportScoreParams};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Schedules a new match.
    ///
    /// The match starts in `scheduled` status with no scores.
    ///
    /// # Arguments
    /// - `params`: Season, both team ids, and the scheduled time
    ///
    /// # Returns
    /// - `Ok(Model)`: The created match
    /// - `Err(DbErr)`: Database error (including unknown season or team ids)
    pub async fn create(&self, params: CreateMatchParams) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            home_team_id: ActiveValue::Set(params.home_team_id),
            away_team_id: ActiveValue::Set(params.away_team_id),
            home_score: ActiveValue::Set(None),
            away_score: ActiveValue::Set(None),
            status: ActiveValue::Set(MatchStatus::Scheduled.as_str().to_string()),
            overtime: ActiveValue::Set(false),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a match by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::matches::Model>, DbErr> {
        entity::prelude::Matches::find_by_id(id).one(self.db).await
    }

    /// Gets paginated matches for a season, ordered by scheduled time.
    ///
    /// # Arguments
    /// - `season_id`: Season to list
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((matches, total))`: Vector of matches and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated_by_season(
        &self,
        season_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::matches::Model>, u64), DbErr> {
        let paginator = entity::prelude::Matches::find()
            .filter(entity::matches::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::matches::Column::ScheduledAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let matches = paginator.fetch_page(page).await?;

        Ok((matches, total))
    }

    /// Gets every completed match in a season, ordered by id.
    ///
    /// Only rows already in `completed` status are returned; score presence
    /// is validated above this layer where skipped rows are counted.
    pub async fn get_completed_by_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<entity::matches::Model>, DbErr> {
        entity::prelude::Matches::find()
            .filter(entity::matches::Column::SeasonId.eq(season_id))
            .filter(entity::matches::Column::Status.eq(MatchStatus::Completed.as_str()))
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await
    }

    /// Records a final score and completes the match.
    ///
    /// The write is conditional on the match not being completed yet, so a
    /// result can never be overwritten by a duplicate report.
    ///
    /// # Returns
    /// - `Ok(1)`: Score recorded and match completed
    /// - `Ok(0)`: Match missing or already completed
    /// - `Err(DbErr)`: Database error
    pub async fn report_score(&self, params: ReportScoreParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Matches::update_many()
            .col_expr(
                entity::matches::Column::HomeScore,
                Expr::value(params.home_score),
            )
            .col_expr(
                entity::matches::Column::AwayScore,
                Expr::value(params.away_score),
            )
            .col_expr(
                entity::matches::Column::Overtime,
                Expr::value(params.overtime),
            )
            .col_expr(
                entity::matches::Column::Status,
                Expr::value(MatchStatus::Completed.as_str()),
            )
            .filter(entity::matches::Column::Id.eq(params.id))
            .filter(entity::matches::Column::Status.ne(MatchStatus::Completed.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

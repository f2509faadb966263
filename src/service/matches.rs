//! Match service.
//!
//! Schedules matches and records final results. Completed results are
//! immutable: a second score report for the same match is rejected.

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    data::{matches::MatchRepository, season::SeasonRepository, team::TeamRepository},
    error::AppError,
    model::matches::{CreateMatchParams, Match, ReportScoreParams},
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a new match between two distinct teams.
    ///
    /// # Returns
    /// - `Ok(Match)`: The scheduled match
    /// - `Err(AppError::BadRequest)`: Both sides are the same team
    /// - `Err(AppError::NotFound)`: Unknown season or team
    pub async fn create(&self, params: CreateMatchParams) -> Result<Match, AppError> {
        if params.home_team_id == params.away_team_id {
            return Err(AppError::BadRequest(
                "A match needs two distinct teams".to_string(),
            ));
        }

        SeasonRepository::new(self.db)
            .get_by_id(params.season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        let team_repo = TeamRepository::new(self.db);
        for team_id in [params.home_team_id, params.away_team_id] {
            team_repo
                .get_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;
        }

        let created = MatchRepository::new(self.db).create(params).await?;

        Match::from_entity(created)
            .map_err(|err| AppError::InternalError(format!("Created match failed to parse: {err}")))
    }

    /// Records a final score and completes the match.
    ///
    /// # Returns
    /// - `Ok(Match)`: The completed match
    /// - `Err(AppError::BadRequest)`: Negative score, or result already recorded
    /// - `Err(AppError::NotFound)`: No such match
    pub async fn report_score(&self, params: ReportScoreParams) -> Result<Match, AppError> {
        if params.home_score < 0 || params.away_score < 0 {
            return Err(AppError::BadRequest(
                "Scores must be non-negative".to_string(),
            ));
        }

        let repo = MatchRepository::new(self.db);

        repo.get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;

        let updated = repo.report_score(params.clone()).await?;
        if updated == 0 {
            return Err(AppError::BadRequest(
                "Match result has already been recorded".to_string(),
            ));
        }

        let completed = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Match not found after update".to_string()))?;

        Match::from_entity(completed)
            .map_err(|err| AppError::InternalError(format!("Updated match failed to parse: {err}")))
    }

    /// Gets paginated matches for a season.
    ///
    /// Rows with unrecognized status strings are skipped.
    pub async fn paginated_by_season(
        &self,
        season_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Match>, u64), AppError> {
        SeasonRepository::new(self.db)
            .get_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        let (rows, total) = MatchRepository::new(self.db)
            .get_paginated_by_season(season_id, page, per_page)
            .await?;

        let matches = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Match::from_entity(row) {
                    Ok(m) => Some(m),
                    Err(err) => {
                        warn!("Skipping match {}: {}", id, err);
                        None
                    }
                }
            })
            .collect();

        Ok((matches, total))
    }
}

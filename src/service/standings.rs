//! Standings service.
//!
//! Fetches the team and completed-match snapshots for a season, validates
//! rows at the boundary, runs the standings computation, and assembles the
//! response DTOs. Rows that fail validation are counted as skipped, never
//! fatal.

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    data::{matches::MatchRepository, season::SeasonRepository, team::TeamRepository},
    domain::standings::{
        compute_standings, group_by_conference, CompletedMatch, StandingsConfig, StandingsTable,
        TeamRecord,
    },
    dto::standings::{GroupedStandingsDto, StandingsDto},
    error::AppError,
    model::{matches::Match, team::team_record},
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
    config: StandingsConfig,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: StandingsConfig) -> Self {
        Self { db, config }
    }

    /// Computes the ranked standings for a season.
    ///
    /// # Returns
    /// - `Ok(StandingsDto)`: Ranked entries plus the skipped-record count
    /// - `Err(AppError::NotFound)`: Season does not exist
    /// - `Err(AppError)`: Database error
    pub async fn season_standings(&self, season_id: i32) -> Result<StandingsDto, AppError> {
        let (table, skipped_rows) = self.compute(season_id).await?;

        Ok(StandingsDto {
            season_id,
            entries: table.entries.into_iter().map(Into::into).collect(),
            skipped_matches: table.skipped_matches + skipped_rows,
        })
    }

    /// Computes standings for a season grouped by conference.
    ///
    /// Teams without a conference assignment are reported under a trailing
    /// "No Conference" group.
    pub async fn season_standings_by_conference(
        &self,
        season_id: i32,
    ) -> Result<GroupedStandingsDto, AppError> {
        let (table, skipped_rows) = self.compute(season_id).await?;

        Ok(GroupedStandingsDto {
            season_id,
            groups: group_by_conference(&table.entries)
                .into_iter()
                .map(Into::into)
                .collect(),
            skipped_matches: table.skipped_matches + skipped_rows,
        })
    }

    /// Runs the computation and returns the table plus the number of rows
    /// dropped during boundary validation.
    async fn compute(&self, season_id: i32) -> Result<(StandingsTable, usize), AppError> {
        SeasonRepository::new(self.db)
            .get_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        let teams: Vec<TeamRecord> = TeamRepository::new(self.db)
            .get_all_with_conferences()
            .await?
            .iter()
            .map(|(team, conference)| team_record(team, conference.as_ref()))
            .collect();

        let rows = MatchRepository::new(self.db)
            .get_completed_by_season(season_id)
            .await?;
        let total_rows = rows.len();

        let matches: Vec<CompletedMatch> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Match::from_entity(row) {
                    Ok(m) => {
                        let snapshot = m.completed_snapshot();
                        if snapshot.is_none() {
                            warn!("Match {} is completed but has no usable score", id);
                        }
                        snapshot
                    }
                    Err(err) => {
                        warn!("Skipping match {}: {}", id, err);
                        None
                    }
                }
            })
            .collect();

        let skipped_rows = total_rows - matches.len();
        let table = compute_standings(&teams, &matches, &self.config);

        Ok((table, skipped_rows))
    }
}

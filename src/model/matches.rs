use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::standings::CompletedMatch;

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// Error returned when a match status string cannot be recognized.
#[derive(Debug, Error)]
#[error("unrecognized match status '{0}'")]
pub struct ParseMatchStatusError(String);

impl FromStr for MatchStatus {
    type Err = ParseMatchStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(ParseMatchStatusError(other.to_string())),
        }
    }
}

/// A scheduled or played match between two teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub overtime: bool,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Converts an entity model to a match domain model at the repository
    /// boundary. Fails if the stored status string is not a known status.
    pub fn from_entity(entity: entity::matches::Model) -> Result<Self, ParseMatchStatusError> {
        Ok(Self {
            id: entity.id,
            season_id: entity.season_id,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            home_score: entity.home_score,
            away_score: entity.away_score,
            status: entity.status.parse()?,
            overtime: entity.overtime,
            scheduled_at: entity.scheduled_at,
            created_at: entity.created_at,
        })
    }

    /// Standings-engine snapshot of this match.
    ///
    /// Returns `None` unless the match is completed with both scores present
    /// and non-negative; callers count the `None`s from completed rows as
    /// skipped records.
    pub fn completed_snapshot(&self) -> Option<CompletedMatch> {
        if self.status != MatchStatus::Completed {
            return None;
        }
        let home_score = u32::try_from(self.home_score?).ok()?;
        let away_score = u32::try_from(self.away_score?).ok()?;

        Some(CompletedMatch {
            id: self.id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_score,
            away_score,
            overtime: self.overtime,
        })
    }
}

/// Parameters for scheduling a new match.
#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub scheduled_at: DateTime<Utc>,
}

/// Parameters for reporting a final score.
#[derive(Debug, Clone)]
pub struct ReportScoreParams {
    pub id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub overtime: bool,
}

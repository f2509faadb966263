use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::matches::Match;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: String,
    pub overtime: bool,
    pub scheduled_at: DateTime<Utc>,
}

impl From<Match> for MatchDto {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            season_id: m.season_id,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            home_score: m.home_score,
            away_score: m.away_score,
            status: m.status.as_str().to_string(),
            overtime: m.overtime,
            scheduled_at: m.scheduled_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedMatchesDto {
    pub matches: Vec<MatchDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateMatchDto {
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReportScoreDto {
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default)]
    pub overtime: bool,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::standings::{ConferenceGroup, TeamStanding};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TeamStandingDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub conference_id: Option<i32>,
    pub conference_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub otl: u32,
    pub draws: u32,
    pub games_played: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_differential: i64,
}

impl From<TeamStanding> for TeamStandingDto {
    fn from(entry: TeamStanding) -> Self {
        Self {
            team_id: entry.team_id,
            team_name: entry.team_name,
            logo_url: entry.logo_url,
            conference_id: entry.conference.as_ref().map(|c| c.id),
            conference_name: entry.conference.map(|c| c.name),
            wins: entry.wins,
            losses: entry.losses,
            otl: entry.otl,
            draws: entry.draws,
            games_played: entry.games_played,
            points: entry.points,
            goals_for: entry.goals_for,
            goals_against: entry.goals_against,
            goal_differential: entry.goal_differential,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StandingsDto {
    pub season_id: i32,
    pub entries: Vec<TeamStandingDto>,
    pub skipped_matches: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConferenceGroupDto {
    pub conference_id: Option<i32>,
    pub conference_name: String,
    pub color: Option<String>,
    pub entries: Vec<TeamStandingDto>,
}

impl From<ConferenceGroup> for ConferenceGroupDto {
    fn from(group: ConferenceGroup) -> Self {
        let (conference_id, conference_name, color) = match group.conference {
            Some(conference) => (Some(conference.id), conference.name, conference.color),
            None => (None, "No Conference".to_string(), None),
        };

        Self {
            conference_id,
            conference_name,
            color,
            entries: group.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GroupedStandingsDto {
    pub season_id: i32,
    pub groups: Vec<ConferenceGroupDto>,
    pub skipped_matches: usize,
}

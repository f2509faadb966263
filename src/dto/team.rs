use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::team::Team;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub conference_id: Option<i32>,
    pub budget: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            logo_url: team.logo_url,
            conference_id: team.conference_id,
            budget: team.budget,
            created_at: team.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedTeamsDto {
    pub teams: Vec<TeamDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub logo_url: Option<String>,
    pub conference_id: Option<i32>,
    #[serde(default)]
    pub budget: i64,
}

/// Update payload; omitted fields are left unchanged. For nullable columns an
/// explicit `null` clears the value, while leaving the field out keeps it.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub conference_id: Option<Option<i32>>,
    pub budget: Option<i64>,
}

/// Deserializes a present-but-possibly-null field into `Some(inner)`, so a
/// missing field (`None` via default) stays distinguishable from `null`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

use chrono::{DateTime, Utc};

use crate::domain::standings::TeamRecord;
use crate::model::conference::conference_ref;

/// A league team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub conference_id: Option<i32>,
    pub budget: i64,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo_url: entity.logo_url,
            conference_id: entity.conference_id,
            budget: entity.budget,
            created_at: entity.created_at,
        }
    }
}

/// Builds the standings-engine team snapshot from an entity row and its
/// optional conference.
pub fn team_record(
    team: &entity::team::Model,
    conference: Option<&entity::conference::Model>,
) -> TeamRecord {
    TeamRecord {
        id: team.id,
        name: team.name.clone(),
        logo_url: team.logo_url.clone(),
        conference: conference.map(conference_ref),
    }
}

/// Parameters for creating a new team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub logo_url: Option<String>,
    pub conference_id: Option<i32>,
    pub budget: i64,
}

/// Parameters for updating an existing team.
///
/// All fields are optional - only provided fields will be updated. For
/// nullable columns the outer Option indicates field presence and the inner
/// Option the new value.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub name: Option<String>,
    pub logo_url: Option<Option<String>>,
    pub conference_id: Option<Option<i32>>,
    pub budget: Option<i64>,
}

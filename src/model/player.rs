use chrono::{DateTime, Utc};

/// A player on (or available to) a league roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            team_id: entity.team_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub name: String,
    pub team_id: Option<i32>,
}

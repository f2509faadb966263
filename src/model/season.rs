use chrono::{DateTime, Utc};

/// A league season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new season.
#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub name: String,
}

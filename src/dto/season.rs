use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::season::Season;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Season> for SeasonDto {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            name: season.name,
            active: season.active,
            created_at: season.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateSeasonDto {
    pub name: String,
}

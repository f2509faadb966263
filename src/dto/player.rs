use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::player::Player;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            team_id: player.team_id,
            created_at: player.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerDto {
    pub name: String,
    pub team_id: Option<i32>,
}

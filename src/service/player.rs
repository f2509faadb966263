use sea_orm::DatabaseConnection;

use crate::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::player::{CreatePlayerParams, Player},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new player, optionally already assigned to a team.
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        if let Some(team_id) = params.team_id {
            TeamRepository::new(self.db)
                .get_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        }

        let player = PlayerRepository::new(self.db).create(params).await?;

        Ok(Player::from_entity(player))
    }

    /// Lists players, optionally filtered to one team.
    pub async fn list(&self, team_id: Option<i32>) -> Result<Vec<Player>, AppError> {
        if let Some(team_id) = team_id {
            TeamRepository::new(self.db)
                .get_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        }

        let players = PlayerRepository::new(self.db).get_all(team_id).await?;

        Ok(players.into_iter().map(Player::from_entity).collect())
    }
}

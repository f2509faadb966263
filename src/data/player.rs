use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::player::CreatePlayerParams;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new player.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created player
    /// - `Err(DbErr)`: Database error (including an unknown team id)
    pub async fn create(&self, params: CreatePlayerParams) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            team_id: ActiveValue::Set(params.team_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a player by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Gets all players, optionally filtered to one team, ordered by name.
    pub async fn get_all(
        &self,
        team_id: Option<i32>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let mut query = entity::prelude::Player::find();

        if let Some(team_id) = team_id {
            query = query.filter(entity::player::Column::TeamId.eq(team_id));
        }

        query
            .order_by_asc(entity::player::Column::Name)
            .all(self.db)
            .await
    }

    /// Moves a player onto a team.
    ///
    /// # Returns
    /// - `Ok(1)`: Player reassigned
    /// - `Ok(0)`: Player not found
    /// - `Err(DbErr)`: Database error
    pub async fn assign_team(&self, player_id: i32, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::TeamId, Expr::value(Some(team_id)))
            .filter(entity::player::Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

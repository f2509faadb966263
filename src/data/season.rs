use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::season::CreateSeasonParams;

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new season, active by default.
    pub async fn create(&self, params: CreateSeasonParams) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(params.name),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all seasons, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a season by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find_by_id(id).one(self.db).await
    }
}

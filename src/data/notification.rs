use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Queues a notification for a player.
    pub async fn create(
        &self,
        player_id: i32,
        message: String,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a player's notifications, newest first.
    pub async fn get_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }
}

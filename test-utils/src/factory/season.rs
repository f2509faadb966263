//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active season with a generated name.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    entity::season::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Season {}", next_id())),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

//! Conference factory for creating test conference entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a conference with a generated name and no color.
pub async fn create_conference(
    db: &DatabaseConnection,
) -> Result<entity::conference::Model, DbErr> {
    create_named_conference(db, format!("Conference {}", next_id())).await
}

/// Creates a conference with the given name.
pub async fn create_named_conference(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::conference::Model, DbErr> {
    entity::conference::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        color: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct ConferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConferenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a conference by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::conference::Model>, DbErr> {
        entity::prelude::Conference::find_by_id(id).one(self.db).await
    }
}

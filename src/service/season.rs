use sea_orm::DatabaseConnection;

use crate::{
    data::season::SeasonRepository,
    error::AppError,
    model::season::{CreateSeasonParams, Season},
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new season.
    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Season name cannot be empty".to_string(),
            ));
        }

        let season = SeasonRepository::new(self.db).create(params).await?;

        Ok(Season::from_entity(season))
    }

    /// Lists all seasons, newest first.
    pub async fn list(&self) -> Result<Vec<Season>, AppError> {
        let seasons = SeasonRepository::new(self.db).get_all().await?;

        Ok(seasons.into_iter().map(Season::from_entity).collect())
    }
}

use sea_orm::DatabaseConnection;

use crate::{
    data::{conference::ConferenceRepository, team::TeamRepository},
    error::AppError,
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team.
    ///
    /// # Returns
    /// - `Ok(Team)`: The created team
    /// - `Err(AppError::BadRequest)`: Negative starting budget
    /// - `Err(AppError::NotFound)`: Unknown conference
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        if params.budget < 0 {
            return Err(AppError::BadRequest(
                "Team budget cannot be negative".to_string(),
            ));
        }

        if let Some(conference_id) = params.conference_id {
            ConferenceRepository::new(self.db)
                .get_by_id(conference_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conference not found".to_string()))?;
        }

        let team = TeamRepository::new(self.db).create(params).await?;

        Ok(Team::from_entity(team))
    }

    /// Gets a team by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(Team::from_entity(team))
    }

    /// Gets paginated teams.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Team>, u64), AppError> {
        let (teams, total) = TeamRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok((teams.into_iter().map(Team::from_entity).collect(), total))
    }

    /// Updates a team.
    ///
    /// # Returns
    /// - `Ok(Team)`: The updated team
    /// - `Err(AppError::NotFound)`: Unknown team or conference
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        repo.get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        if let Some(Some(conference_id)) = params.conference_id {
            ConferenceRepository::new(self.db)
                .get_by_id(conference_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conference not found".to_string()))?;
        }

        let team = repo.update(params).await?;

        Ok(Team::from_entity(team))
    }

    /// Deletes a team.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        repo.delete(id).await?;

        Ok(())
    }
}

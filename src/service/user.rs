use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    data::user::UserRepository,
    domain::role::Role,
    error::AppError,
    model::user::User,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated users.
    ///
    /// Rows with unrecognized role strings are skipped.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let (rows, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let users = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match User::from_entity(row) {
                    Ok(user) => Some(user),
                    Err(err) => {
                        warn!("Skipping user {}: {}", id, err);
                        None
                    }
                }
            })
            .collect();

        Ok((users, total))
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(User)`: The updated user
    /// - `Err(AppError::BadRequest)`: Unknown role string
    /// - `Err(AppError::NotFound)`: No such user
    pub async fn set_role(&self, id: i32, role: &str) -> Result<User, AppError> {
        let role: Role = role
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Unknown role '{}'", role)))?;

        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let updated = repo.set_role(id, role).await?;

        User::from_entity(updated)
            .map_err(|err| AppError::InternalError(format!("Updated user failed to parse: {err}")))
    }
}

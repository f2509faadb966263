//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db)
///     .name("Custom Team")
///     .budget(250_000)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    logo_url: Option<String>,
    conference_id: Option<i32>,
    budget: i64,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - logo_url: `None`
    /// - conference_id: `None`
    /// - budget: `1_000_000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            logo_url: None,
            conference_id: None,
            budget: 1_000_000,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the conference the team belongs to.
    pub fn conference_id(mut self, conference_id: Option<i32>) -> Self {
        self.conference_id = conference_id;
        self
    }

    /// Sets the team budget.
    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            logo_url: ActiveValue::Set(self.logo_url),
            conference_id: ActiveValue::Set(self.conference_id),
            budget: ActiveValue::Set(self.budget),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

use chrono::{DateTime, Utc};

use crate::domain::role::{ParseRoleError, Role};

/// League user with a parsed role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository
    /// boundary. Fails if the stored role string is not a known role.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, ParseRoleError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            role: entity.role.parse()?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for inserting or updating a user by name.
///
/// The role is only written when explicitly provided, so a regular login
/// never downgrades an existing admin.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub name: String,
    pub role: Option<Role>,
}

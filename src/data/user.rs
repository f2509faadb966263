//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and role management. Role strings are
//! parsed into the closed `Role` enum above this layer, at the model boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::role::Role;
use crate::model::user::UpsertUserParam;

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user by name.
    ///
    /// Inserts a new user or updates an existing user's role. The role is only
    /// updated if explicitly provided (Some value), preventing accidental
    /// downgrades during regular login operations.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including name and optional role
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let mut on_conflict = OnConflict::column(entity::user::Column::Name);

        if param.role.is_some() {
            on_conflict.update_column(entity::user::Column::Role);
        } else {
            // SQLite needs at least one update target for DO UPDATE; writing
            // the name back is a no-op.
            on_conflict.update_column(entity::user::Column::Name);
        }

        entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(
                param
                    .role
                    .unwrap_or(Role::Member)
                    .as_str()
                    .to_string(),
            ),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(on_conflict.to_owned())
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during first-time setup to decide whether an admin bootstrap code
    /// should be issued.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets paginated users ordered by name.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((users, total))`: Vector of users and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - User not found or database error
    pub async fn set_role(&self, id: i32, role: Role) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());

        active_model.update(self.db).await
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::team::{CreateTeamParams, UpdateTeamParams};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team.
    ///
    /// # Arguments
    /// - `params`: Team name, optional logo/conference, and starting budget
    ///
    /// # Returns
    /// - `Ok(Model)`: The created team
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTeamParams) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            logo_url: ActiveValue::Set(params.logo_url),
            conference_id: ActiveValue::Set(params.conference_id),
            budget: ActiveValue::Set(params.budget),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a team by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Team found
    /// - `Ok(None)`: Team not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Gets every team together with its conference, ordered by id.
    ///
    /// This is the standings computation input: one row per team, with the
    /// conference row joined in when the team has one.
    pub async fn get_all_with_conferences(
        &self,
    ) -> Result<Vec<(entity::team::Model, Option<entity::conference::Model>)>, DbErr> {
        entity::prelude::Team::find()
            .find_also_related(entity::prelude::Conference)
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets paginated teams ordered by name.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((teams, total))`: Vector of teams and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::team::Model>, u64), DbErr> {
        let paginator = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let teams = paginator.fetch_page(page).await?;

        Ok((teams, total))
    }

    /// Updates a team.
    ///
    /// # Arguments
    /// - `params`: Team id plus the fields to change; `None` fields are left
    ///   untouched
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated team
    /// - `Err(DbErr)`: Team not found or database error
    pub async fn update(&self, params: UpdateTeamParams) -> Result<entity::team::Model, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team {} not found",
                params.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(logo_url) = params.logo_url {
            active_model.logo_url = ActiveValue::Set(logo_url);
        }
        if let Some(conference_id) = params.conference_id {
            active_model.conference_id = ActiveValue::Set(conference_id);
        }
        if let Some(budget) = params.budget {
            active_model.budget = ActiveValue::Set(budget);
        }

        active_model.update(self.db).await
    }

    /// Deletes a team by ID.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Deducts an amount from a team's budget if the budget covers it.
    ///
    /// The deduction is a single conditional update, so two concurrent
    /// charges can never overdraw the budget.
    ///
    /// # Returns
    /// - `Ok(1)`: Budget charged
    /// - `Ok(0)`: Team missing or budget insufficient
    /// - `Err(DbErr)`: Database error
    pub async fn charge_budget(&self, team_id: i32, amount: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::Budget,
                Expr::col(entity::team::Column::Budget).sub(amount),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::Budget.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

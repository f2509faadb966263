use crate::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod charge_budget;
mod create;
mod get_all_with_conferences;
mod update;

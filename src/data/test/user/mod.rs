use crate::{
    data::user::UserRepository,
    domain::role::Role,
    model::user::UpsertUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod get_all_paginated;
mod set_role;
mod upsert;

use crate::{data::player::PlayerRepository, model::player::CreatePlayerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_team;
mod create;

use crate::{
    data::matches::MatchRepository,
    model::matches::{CreateMatchParams, MatchStatus, ReportScoreParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_completed_by_season;
mod report_score;

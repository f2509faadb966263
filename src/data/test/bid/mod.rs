use crate::{
    data::bid::BidRepository,
    domain::settlement::BidStatus,
    model::bid::PlaceBidParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod create;
mod finalize_winner;
mod get_due_for_settlement;
mod mark_outbid;

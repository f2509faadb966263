//! Cron jobs for automated tasks.

pub mod bid_settlement;

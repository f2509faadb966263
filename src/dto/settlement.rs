use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::settlement::{BidResolution, SettlementReport};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BidResolutionDto {
    pub player_id: i32,
    pub winning_bid_id: i32,
    pub winning_team_id: i32,
    pub amount: i64,
    pub losing_bid_ids: Vec<i32>,
}

impl From<BidResolution> for BidResolutionDto {
    fn from(resolution: BidResolution) -> Self {
        Self {
            player_id: resolution.player_id,
            winning_bid_id: resolution.winning_bid_id,
            winning_team_id: resolution.winning_team_id,
            amount: resolution.amount,
            losing_bid_ids: resolution.losing_bid_ids,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SettlementReportDto {
    pub players_processed: usize,
    pub resolutions: Vec<BidResolutionDto>,
    pub errors: Vec<String>,
    pub skipped_bids: usize,
}

impl From<SettlementReport> for SettlementReportDto {
    fn from(report: SettlementReport) -> Self {
        Self {
            players_processed: report.players_processed,
            resolutions: report.resolutions.into_iter().map(Into::into).collect(),
            errors: report.errors,
            skipped_bids: report.skipped_bids,
        }
    }
}

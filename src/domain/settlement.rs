//! Expired-bid settlement.
//!
//! Resolves player auctions once their bids have passed expiry: picks the
//! winning bid per player, commits the transfer through the store seam, and
//! reports per-player outcomes. The resolution pass holds no locks and keeps
//! no state between runs — double-award protection comes from the store's
//! conditional finalize, and a pass re-run over already-finalized bids is a
//! no-op.

use std::collections::BTreeMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

/// Lifecycle state of a bid.
///
/// `Active` is the only state a bid can leave; `Outbid`, `Cancelled`, and
/// `Finalized` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStatus {
    Active,
    Outbid,
    Cancelled,
    Finalized,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Outbid => "outbid",
            Self::Cancelled => "cancelled",
            Self::Finalized => "finalized",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Error returned when a bid status string cannot be recognized.
#[derive(Debug, Error)]
#[error("unrecognized bid status '{0}'")]
pub struct ParseBidStatusError(String);

impl FromStr for BidStatus {
    type Err = ParseBidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "outbid" => Ok(Self::Outbid),
            "cancelled" => Ok(Self::Cancelled),
            "finalized" => Ok(Self::Finalized),
            other => Err(ParseBidStatusError(other.to_string())),
        }
    }
}

/// Bid snapshot used as settlement input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRecord {
    pub id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub amount: i64,
    pub expires_at: DateTime<Utc>,
    pub status: BidStatus,
    pub finalized: bool,
    pub created_at: DateTime<Utc>,
}

/// Outcome of settling one player's bid group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidResolution {
    pub player_id: i32,
    pub winning_bid_id: i32,
    pub winning_team_id: i32,
    pub amount: i64,
    pub losing_bid_ids: Vec<i32>,
}

/// Aggregate result of one settlement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementReport {
    pub players_processed: usize,
    pub resolutions: Vec<BidResolution>,
    pub errors: Vec<String>,
    pub skipped_bids: usize,
}

/// Failure raised by the settlement store.
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("player {0} not found")]
    PlayerNotFound(i32),

    #[error("team {0} not found")]
    TeamNotFound(i32),

    #[error("team {team_id} budget {budget} cannot cover bid amount {amount}")]
    InsufficientBudget {
        team_id: i32,
        budget: i64,
        amount: i64,
    },

    /// Another settlement run finalized this player's winning bid first. The
    /// output for the player is discarded and nothing further is written.
    #[error("player {0} was already settled by a concurrent settlement run")]
    LostSettlementRace(i32),

    #[error("{0}")]
    Store(String),
}

/// Persistence seam the settlement pass writes through.
///
/// `commit_transfer` is authoritative: it must finalize the winning bid under
/// a `finalized = false` conditional update (so a concurrent run cannot
/// double-award the player), assign the player to the winning team, and
/// charge the team budget. The pass only touches losing bids and
/// notifications after the commit has succeeded.
#[async_trait]
pub trait SettlementStore {
    async fn commit_transfer(
        &self,
        player_id: i32,
        team_id: i32,
        amount: i64,
    ) -> Result<(), SettlementError>;

    /// Marks every losing bid in the resolution as outbid and finalized.
    async fn finalize_losing_bids(&self, resolution: &BidResolution)
        -> Result<(), SettlementError>;

    /// Queues a notification for the transferred player.
    async fn notify_winner(&self, resolution: &BidResolution) -> Result<(), SettlementError>;
}

/// Selects the winning bid from one player's group: highest amount, with
/// equal amounts breaking to the lowest bid id (the earliest-placed bid).
pub fn select_winner<'a>(bids: &[&'a BidRecord]) -> Option<&'a BidRecord> {
    bids.iter()
        .copied()
        .max_by(|a, b| a.amount.cmp(&b.amount).then(b.id.cmp(&a.id)))
}

/// Settles every player whose bids have expired.
///
/// Only bids with `expires_at <= now`, status `active`, and `finalized =
/// false` participate; bids with non-positive amounts are dropped and counted
/// in `skipped_bids`. Players are settled independently in ascending id
/// order: a failed transfer is recorded as an error for that player alone,
/// leaves the player's whole bid group untouched for the next pass, and never
/// stops the batch. A notification failure is logged and swallowed — the
/// committed transfer stands.
pub async fn resolve_expired_bids<S>(
    bids: &[BidRecord],
    now: DateTime<Utc>,
    store: &S,
) -> SettlementReport
where
    S: SettlementStore + Sync + ?Sized,
{
    let mut report = SettlementReport::default();
    let mut groups: BTreeMap<i32, Vec<&BidRecord>> = BTreeMap::new();

    for bid in bids {
        if bid.status != BidStatus::Active || bid.finalized || bid.expires_at > now {
            continue;
        }
        if bid.amount <= 0 {
            report.skipped_bids += 1;
            continue;
        }
        groups.entry(bid.player_id).or_default().push(bid);
    }

    for (player_id, group) in groups {
        let Some(winner) = select_winner(&group) else {
            continue;
        };

        let resolution = BidResolution {
            player_id,
            winning_bid_id: winner.id,
            winning_team_id: winner.team_id,
            amount: winner.amount,
            losing_bid_ids: group
                .iter()
                .filter(|bid| bid.id != winner.id)
                .map(|bid| bid.id)
                .collect(),
        };

        if let Err(err) = store
            .commit_transfer(player_id, winner.team_id, winner.amount)
            .await
        {
            report.errors.push(format!("player {player_id}: {err}"));
            continue;
        }

        if let Err(err) = store.finalize_losing_bids(&resolution).await {
            // The transfer is already committed; surface the inconsistency so
            // operators can reconcile, and let the next pass retry the
            // remaining active bids.
            report
                .errors
                .push(format!("player {player_id}: losing bids not finalized: {err}"));
        }

        if let Err(err) = store.notify_winner(&resolution).await {
            warn!("notification for player {player_id} failed: {err}");
        }

        report.resolutions.push(resolution);
        report.players_processed += 1;
    }

    report
}

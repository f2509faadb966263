//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a season and two teams for scheduling matches.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((season, home_team, away_team))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::season::Model,
        entity::team::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let season = crate::factory::season::create_season(db).await?;
    let home_team = crate::factory::team::create_team(db).await?;
    let away_team = crate::factory::team::create_team(db).await?;

    Ok((season, home_team, away_team))
}

/// Creates a team and an unassigned player for bidding scenarios.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((team, player))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bid_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::team::Model, entity::player::Model), DbErr> {
    let team = crate::factory::team::create_team(db).await?;
    let player = crate::factory::player::create_player(db).await?;

    Ok((team, player))
}

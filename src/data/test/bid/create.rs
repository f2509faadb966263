use super::*;

/// Tests placing a new bid.
///
/// Verifies that the repository creates the bid in `active` status with the
/// finalized flag unset.
///
/// Expected: Ok with bid created
#[tokio::test]
async fn creates_active_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;

    let expires_at = Utc::now() + Duration::hours(2);
    let repo = BidRepository::new(db);
    let bid = repo
        .create(PlaceBidParams {
            player_id: player.id,
            team_id: team.id,
            amount: 250_000,
            expires_at,
        })
        .await?;

    assert_eq!(bid.player_id, player.id);
    assert_eq!(bid.team_id, team.id);
    assert_eq!(bid.amount, 250_000);
    assert_eq!(bid.expires_at, expires_at);
    assert_eq!(bid.status, BidStatus::Active.as_str());
    assert!(!bid.finalized);

    Ok(())
}

/// Tests foreign key constraint on player_id.
///
/// Verifies that the repository returns an error when the referenced player
/// does not exist.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let repo = BidRepository::new(db);
    let result = repo
        .create(PlaceBidParams {
            player_id: 999999,
            team_id: team.id,
            amount: 250_000,
            expires_at: Utc::now() + Duration::hours(2),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

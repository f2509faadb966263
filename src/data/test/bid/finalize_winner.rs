use super::*;

/// Tests the conditional winner finalization.
///
/// Verifies that the update claims the bid on the first call and reports
/// zero affected rows on a repeat call, which is the guard two concurrent
/// settlement runs rely on.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn finalizes_winning_bid_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let bid = factory::bid::create_expired_bid(db, player.id, team.id, 500_000).await?;

    let repo = BidRepository::new(db);
    let claimed = repo.finalize_winner(player.id, team.id, 500_000).await?;
    assert_eq!(claimed, 1);

    let stored = repo.get_by_id(bid.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Finalized.as_str());
    assert!(stored.finalized);

    // The losing run of a race observes zero affected rows.
    let reclaimed = repo.finalize_winner(player.id, team.id, 500_000).await?;
    assert_eq!(reclaimed, 0);

    Ok(())
}

/// Tests that finalizing a winner leaves competing bids alone.
///
/// Verifies that only the bid matching (player, team, amount) is touched;
/// another team's bid on the same player stays active.
///
/// Expected: Ok with the competing bid unchanged
#[tokio::test]
async fn leaves_competing_bids_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let other_team = factory::team::create_team(db).await?;

    factory::bid::create_expired_bid(db, player.id, team.id, 750_000).await?;
    let competing = factory::bid::create_expired_bid(db, player.id, other_team.id, 500_000).await?;

    let repo = BidRepository::new(db);
    let claimed = repo.finalize_winner(player.id, team.id, 750_000).await?;
    assert_eq!(claimed, 1);

    let stored = repo.get_by_id(competing.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Active.as_str());
    assert!(!stored.finalized);

    Ok(())
}

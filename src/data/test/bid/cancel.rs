use super::*;

/// Tests cancelling an active bid.
///
/// Verifies that the bid moves to `cancelled` with the finalized flag set.
///
/// Expected: Ok(1) with bid cancelled
#[tokio::test]
async fn cancels_active_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let bid = factory::bid::create_bid(db, player.id, team.id).await?;

    let repo = BidRepository::new(db);
    let cancelled = repo.cancel(bid.id).await?;
    assert_eq!(cancelled, 1);

    let stored = repo.get_by_id(bid.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Cancelled.as_str());
    assert!(stored.finalized);

    Ok(())
}

/// Tests that cancellation is terminal.
///
/// Verifies that a second cancel of the same bid affects nothing.
///
/// Expected: Ok(0) on the repeat call
#[tokio::test]
async fn refuses_second_cancel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let bid = factory::bid::create_bid(db, player.id, team.id).await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.cancel(bid.id).await?, 1);
    assert_eq!(repo.cancel(bid.id).await?, 0);

    Ok(())
}

/// Tests that a settled bid cannot be cancelled.
///
/// Verifies that a bid already marked `outbid` keeps its state.
///
/// Expected: Ok(0) with the bid unchanged
#[tokio::test]
async fn refuses_to_cancel_settled_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let bid = factory::bid::BidFactory::new(db, player.id, team.id)
        .status("outbid")
        .finalized(true)
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let cancelled = repo.cancel(bid.id).await?;
    assert_eq!(cancelled, 0);

    let stored = repo.get_by_id(bid.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Outbid.as_str());

    Ok(())
}

/// Tests cancelling a bid that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BidRepository::new(db);
    let cancelled = repo.cancel(999999).await?;

    assert_eq!(cancelled, 0);

    Ok(())
}

use super::*;

/// Tests marking losing bids as outbid.
///
/// Verifies that every listed active bid moves to `outbid` with the
/// finalized flag set.
///
/// Expected: Ok(2) with both bids updated
#[tokio::test]
async fn marks_listed_active_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let other_team = factory::team::create_team(db).await?;

    let first = factory::bid::create_expired_bid(db, player.id, team.id, 100_000).await?;
    let second = factory::bid::create_expired_bid(db, player.id, other_team.id, 200_000).await?;

    let repo = BidRepository::new(db);
    let updated = repo.mark_outbid(&[first.id, second.id]).await?;
    assert_eq!(updated, 2);

    for id in [first.id, second.id] {
        let stored = repo.get_by_id(id).await?.unwrap();
        assert_eq!(stored.status, BidStatus::Outbid.as_str());
        assert!(stored.finalized);
    }

    Ok(())
}

/// Tests that terminal bids are never re-marked.
///
/// Verifies that a cancelled bid included in the id list stays cancelled.
///
/// Expected: Ok(0) with the bid unchanged
#[tokio::test]
async fn skips_terminal_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;

    let cancelled = factory::bid::BidFactory::new(db, player.id, team.id)
        .status("cancelled")
        .finalized(true)
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let updated = repo.mark_outbid(&[cancelled.id]).await?;
    assert_eq!(updated, 0);

    let stored = repo.get_by_id(cancelled.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Cancelled.as_str());

    Ok(())
}

/// Tests the empty id list short circuit.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_id_list_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BidRepository::new(db);
    let updated = repo.mark_outbid(&[]).await?;

    assert_eq!(updated, 0);

    Ok(())
}

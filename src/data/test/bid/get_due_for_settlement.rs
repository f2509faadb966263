use super::*;

/// Tests the settlement eligibility filter.
///
/// Verifies that only bids past their expiry, still in `active` status, and
/// not yet finalized are returned.
///
/// Expected: Ok with only the due bid
#[tokio::test]
async fn returns_only_due_active_unfinalized_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;

    let due = factory::bid::create_expired_bid(db, player.id, team.id, 500_000).await?;

    // Not yet expired
    factory::bid::BidFactory::new(db, player.id, team.id)
        .expires_at(Utc::now() + Duration::hours(1))
        .build()
        .await?;

    // Expired but already settled
    factory::bid::BidFactory::new(db, player.id, team.id)
        .expires_at(Utc::now() - Duration::minutes(5))
        .status("finalized")
        .finalized(true)
        .build()
        .await?;

    // Expired but cancelled
    factory::bid::BidFactory::new(db, player.id, team.id)
        .expires_at(Utc::now() - Duration::minutes(5))
        .status("cancelled")
        .finalized(true)
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let result = repo.get_due_for_settlement(Utc::now()).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, due.id);

    Ok(())
}

/// Tests deterministic ordering of due bids.
///
/// Verifies that due bids come back in ascending id order regardless of
/// their amounts or expiry times.
///
/// Expected: Ok with bids ordered by id
#[tokio::test]
async fn orders_due_bids_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;
    let other_team = factory::team::create_team(db).await?;

    let first = factory::bid::create_expired_bid(db, player.id, team.id, 100_000).await?;
    let second = factory::bid::create_expired_bid(db, player.id, other_team.id, 900_000).await?;

    let repo = BidRepository::new(db);
    let result = repo.get_due_for_settlement(Utc::now()).await?;

    let ids: Vec<i32> = result.iter().map(|bid| bid.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

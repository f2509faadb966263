use super::*;

/// Tests charging a covered amount.
///
/// Verifies that the budget is reduced by exactly the charged amount.
///
/// Expected: Ok(1) with the budget reduced
#[tokio::test]
async fn charges_when_budget_covers_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .budget(1_000_000)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let charged = repo.charge_budget(team.id, 600_000).await?;
    assert_eq!(charged, 1);

    let stored = repo.get_by_id(team.id).await?.unwrap();
    assert_eq!(stored.budget, 400_000);

    Ok(())
}

/// Tests the overdraft guard.
///
/// Verifies that a charge exceeding the remaining budget affects nothing,
/// leaving the balance untouched.
///
/// Expected: Ok(0) with the budget unchanged
#[tokio::test]
async fn refuses_overdraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .budget(500_000)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let charged = repo.charge_budget(team.id, 600_000).await?;
    assert_eq!(charged, 0);

    let stored = repo.get_by_id(team.id).await?.unwrap();
    assert_eq!(stored.budget, 500_000);

    Ok(())
}

/// Tests charging a team that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let charged = repo.charge_budget(999999, 100).await?;

    assert_eq!(charged, 0);

    Ok(())
}

use super::*;

/// Tests the completed-match filter.
///
/// Verifies that scheduled and in-progress matches are excluded from the
/// standings input.
///
/// Expected: Ok with only the completed match
#[tokio::test]
async fn returns_completed_matches_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, home, away) = factory::helpers::create_match_dependencies(db).await?;

    let completed =
        factory::matches::create_completed_match(db, season.id, home.id, away.id, 2, 1).await?;
    factory::matches::create_match(db, season.id, home.id, away.id).await?;
    factory::matches::MatchFactory::new(db, season.id, home.id, away.id)
        .status("in_progress")
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let result = repo.get_completed_by_season(season.id).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, completed.id);

    Ok(())
}

/// Tests the season filter.
///
/// Verifies that another season's completed matches never leak into the
/// result, and that rows come back in ascending id order.
///
/// Expected: Ok with the season's matches ordered by id
#[tokio::test]
async fn filters_by_season_and_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, home, away) = factory::helpers::create_match_dependencies(db).await?;
    let other_season = factory::season::create_season(db).await?;

    let first =
        factory::matches::create_completed_match(db, season.id, home.id, away.id, 1, 0).await?;
    let second =
        factory::matches::create_completed_match(db, season.id, away.id, home.id, 3, 3).await?;
    factory::matches::create_completed_match(db, other_season.id, home.id, away.id, 5, 0).await?;

    let repo = MatchRepository::new(db);
    let result = repo.get_completed_by_season(season.id).await?;

    let ids: Vec<i32> = result.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

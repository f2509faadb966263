use super::*;

/// Tests recording a final score.
///
/// Verifies that both scores, the overtime flag, and the `completed` status
/// land on the row.
///
/// Expected: Ok(1) with the match completed
#[tokio::test]
async fn records_final_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, home, away) = factory::helpers::create_match_dependencies(db).await?;
    let m = factory::matches::create_match(db, season.id, home.id, away.id).await?;

    let repo = MatchRepository::new(db);
    let updated = repo
        .report_score(ReportScoreParams {
            id: m.id,
            home_score: 3,
            away_score: 2,
            overtime: true,
        })
        .await?;
    assert_eq!(updated, 1);

    let stored = repo.get_by_id(m.id).await?.unwrap();
    assert_eq!(stored.home_score, Some(3));
    assert_eq!(stored.away_score, Some(2));
    assert!(stored.overtime);
    assert_eq!(stored.status, MatchStatus::Completed.as_str());

    Ok(())
}

/// Tests that a completed result is immutable.
///
/// Verifies that a second report for the same match affects nothing and
/// the original score stands.
///
/// Expected: Ok(0) on the repeat report
#[tokio::test]
async fn refuses_duplicate_report() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, home, away) = factory::helpers::create_match_dependencies(db).await?;
    let m =
        factory::matches::create_completed_match(db, season.id, home.id, away.id, 4, 1).await?;

    let repo = MatchRepository::new(db);
    let updated = repo
        .report_score(ReportScoreParams {
            id: m.id,
            home_score: 0,
            away_score: 9,
            overtime: false,
        })
        .await?;
    assert_eq!(updated, 0);

    let stored = repo.get_by_id(m.id).await?.unwrap();
    assert_eq!(stored.home_score, Some(4));
    assert_eq!(stored.away_score, Some(1));

    Ok(())
}

/// Tests reporting a score for a match that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchRepository::new(db);
    let updated = repo
        .report_score(ReportScoreParams {
            id: 999999,
            home_score: 1,
            away_score: 0,
            overtime: false,
        })
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

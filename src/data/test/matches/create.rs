use super::*;

/// Tests scheduling a new match.
///
/// Verifies that the match starts in `scheduled` status with no scores and
/// no overtime flag.
///
/// Expected: Ok with match created
#[tokio::test]
async fn creates_scheduled_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (season, home, away) = factory::helpers::create_match_dependencies(db).await?;

    let scheduled_at = Utc::now() + Duration::days(1);
    let repo = MatchRepository::new(db);
    let created = repo
        .create(CreateMatchParams {
            season_id: season.id,
            home_team_id: home.id,
            away_team_id: away.id,
            scheduled_at,
        })
        .await?;

    assert_eq!(created.season_id, season.id);
    assert_eq!(created.home_team_id, home.id);
    assert_eq!(created.away_team_id, away.id);
    assert_eq!(created.status, MatchStatus::Scheduled.as_str());
    assert_eq!(created.home_score, None);
    assert_eq!(created.away_score, None);
    assert!(!created.overtime);
    assert_eq!(created.scheduled_at, scheduled_at);

    Ok(())
}

/// Tests foreign key constraint on season_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db).await?;
    let away = factory::team::create_team(db).await?;

    let repo = MatchRepository::new(db);
    let result = repo
        .create(CreateMatchParams {
            season_id: 999999,
            home_team_id: home.id,
            away_team_id: away.id,
            scheduled_at: Utc::now() + Duration::days(1),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests the standings input query.
///
/// Verifies that every team comes back exactly once in ascending id order,
/// with its conference row joined in when it has one and `None` otherwise.
///
/// Expected: Ok with all teams and their conferences
#[tokio::test]
async fn joins_conferences_without_dropping_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::conference::create_conference(db).await?;
    let assigned = factory::team::TeamFactory::new(db)
        .conference_id(Some(conference.id))
        .build()
        .await?;
    let unassigned = factory::team::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let result = repo.get_all_with_conferences().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0.id, assigned.id);
    assert_eq!(result[0].1.as_ref().map(|c| c.id), Some(conference.id));
    assert_eq!(result[1].0.id, unassigned.id);
    assert!(result[1].1.is_none());

    Ok(())
}

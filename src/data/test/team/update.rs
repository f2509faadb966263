use super::*;

/// Tests partial updates.
///
/// Verifies that only the provided fields change and everything else keeps
/// its stored value.
///
/// Expected: Ok with name updated, budget untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .name("Old Name")
        .budget(750_000)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(UpdateTeamParams {
            id: team.id,
            name: Some("New Name".to_string()),
            logo_url: None,
            conference_id: None,
            budget: None,
        })
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.budget, 750_000);

    Ok(())
}

/// Tests clearing a nullable column.
///
/// Verifies that passing the inner `None` removes the team's conference
/// assignment.
///
/// Expected: Ok with conference cleared
#[tokio::test]
async fn clears_conference_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::conference::create_conference(db).await?;
    let team = factory::team::TeamFactory::new(db)
        .conference_id(Some(conference.id))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(UpdateTeamParams {
            id: team.id,
            name: None,
            logo_url: None,
            conference_id: Some(None),
            budget: None,
        })
        .await?;

    assert_eq!(updated.conference_id, None);

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .update(UpdateTeamParams {
            id: 999999,
            name: Some("Ghost Team".to_string()),
            logo_url: None,
            conference_id: None,
            budget: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

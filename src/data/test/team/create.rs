use super::*;

/// Tests creating a team without a conference.
///
/// Expected: Ok with team created
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Ice Bears".to_string(),
            logo_url: Some("https://example.com/bears.png".to_string()),
            conference_id: None,
            budget: 2_000_000,
        })
        .await?;

    assert_eq!(team.name, "Ice Bears");
    assert_eq!(team.logo_url, Some("https://example.com/bears.png".to_string()));
    assert_eq!(team.conference_id, None);
    assert_eq!(team.budget, 2_000_000);

    Ok(())
}

/// Tests creating a team inside a conference.
///
/// Expected: Ok with the conference id stored
#[tokio::test]
async fn creates_team_in_conference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let conference = factory::conference::create_conference(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "River Wolves".to_string(),
            logo_url: None,
            conference_id: Some(conference.id),
            budget: 1_000_000,
        })
        .await?;

    assert_eq!(team.conference_id, Some(conference.id));

    Ok(())
}

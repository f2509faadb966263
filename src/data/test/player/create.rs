use super::*;

/// Tests creating a free agent.
///
/// Expected: Ok with no team assigned
#[tokio::test]
async fn creates_free_agent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            name: "Sam Rivers".to_string(),
            team_id: None,
        })
        .await?;

    assert_eq!(player.name, "Sam Rivers");
    assert_eq!(player.team_id, None);

    Ok(())
}

/// Tests creating a player already on a roster.
///
/// Expected: Ok with the team id stored
#[tokio::test]
async fn creates_player_on_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            name: "Sam Rivers".to_string(),
            team_id: Some(team.id),
        })
        .await?;

    assert_eq!(player.team_id, Some(team.id));

    Ok(())
}

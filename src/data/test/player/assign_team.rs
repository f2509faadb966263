use super::*;

/// Tests moving a free agent onto a team.
///
/// Expected: Ok(1) with the team assigned
#[tokio::test]
async fn moves_player_onto_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, player) = factory::helpers::create_bid_dependencies(db).await?;

    let repo = PlayerRepository::new(db);
    let moved = repo.assign_team(player.id, team.id).await?;
    assert_eq!(moved, 1);

    let stored = repo.get_by_id(player.id).await?.unwrap();
    assert_eq!(stored.team_id, Some(team.id));

    Ok(())
}

/// Tests reassigning a player between teams.
///
/// Expected: Ok(1) with the new team replacing the old
#[tokio::test]
async fn reassigns_between_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_team = factory::team::create_team(db).await?;
    let second_team = factory::team::create_team(db).await?;
    let player = factory::player::PlayerFactory::new(db)
        .team_id(Some(first_team.id))
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let moved = repo.assign_team(player.id, second_team.id).await?;
    assert_eq!(moved, 1);

    let stored = repo.get_by_id(player.id).await?.unwrap();
    assert_eq!(stored.team_id, Some(second_team.id));

    Ok(())
}

/// Tests assigning a player that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bid_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let repo = PlayerRepository::new(db);
    let moved = repo.assign_team(999999, team.id).await?;

    assert_eq!(moved, 0);

    Ok(())
}

use super::*;

/// Tests changing a user's role.
///
/// Expected: Ok with the new role stored
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, Role::Commissioner).await?;

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.role, Role::Commissioner.as_str());

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, Role::Commissioner.as_str());

    Ok(())
}

/// Tests setting a role on a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_role(999999, Role::Manager).await;

    assert!(result.is_err());

    Ok(())
}

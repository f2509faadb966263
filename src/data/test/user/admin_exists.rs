use super::*;

/// Tests the fresh-deployment check.
///
/// Verifies that non-admin users do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_admin_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "member").await?;
    factory::user::create_user_with_role(db, "commissioner").await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests detection of an existing admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_with_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "admin").await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

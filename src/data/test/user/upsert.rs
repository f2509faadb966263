use super::*;

/// Tests inserting a brand new user.
///
/// Verifies that a user created without an explicit role lands as a member.
///
/// Expected: Ok with member user created
#[tokio::test]
async fn inserts_new_user_as_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            name: "casey".to_string(),
            role: None,
        })
        .await?;

    assert_eq!(user.name, "casey");
    assert_eq!(user.role, Role::Member.as_str());

    Ok(())
}

/// Tests upserting an existing user with an explicit role.
///
/// Verifies that the role is updated in place and no second row appears.
///
/// Expected: Ok with the same user promoted
#[tokio::test]
async fn updates_role_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo
        .upsert(UpsertUserParam {
            name: "casey".to_string(),
            role: None,
        })
        .await?;

    let promoted = repo
        .upsert(UpsertUserParam {
            name: "casey".to_string(),
            role: Some(Role::Admin),
        })
        .await?;

    assert_eq!(promoted.id, original.id);
    assert_eq!(promoted.role, Role::Admin.as_str());

    Ok(())
}

/// Tests that a role-less upsert never downgrades.
///
/// Verifies that re-upserting an admin without a role leaves the admin role
/// in place.
///
/// Expected: Ok with the admin role preserved
#[tokio::test]
async fn preserves_role_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        name: "casey".to_string(),
        role: Some(Role::Admin),
    })
    .await?;

    let unchanged = repo
        .upsert(UpsertUserParam {
            name: "casey".to_string(),
            role: None,
        })
        .await?;

    assert_eq!(unchanged.role, Role::Admin.as_str());

    Ok(())
}

use super::*;

/// Tests that an admin may manage users.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_granted() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_user_with_role(db, Role::Admin.as_str()).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageUsers])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().role, Role::Admin);

    Ok(())
}

/// Tests that a commissioner may not manage users.
///
/// User administration is the one permission that does not flow down the
/// inheritance chain below admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn commissioner_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, Role::Commissioner.as_str()).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageUsers])
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

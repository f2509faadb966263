use super::*;

/// Tests that a manager may place bids.
///
/// Expected: Ok(User)
#[tokio::test]
async fn manager_granted() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, Role::Manager.as_str()).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PlaceBid])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain member may not place bids.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn member_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, Role::Member.as_str()).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PlaceBid])
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

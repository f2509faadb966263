use super::*;

/// Tests that every role can view the league.
///
/// Viewing sits at the bottom of the inheritance chain, so all four roles
/// inherit it.
///
/// Expected: Ok(User) for each role
#[tokio::test]
async fn every_role_granted() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in [Role::Admin, Role::Commissioner, Role::Manager, Role::Member] {
        let user = factory::user::create_user_with_role(db, role.as_str()).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::ViewLeague])
            .await;

        assert!(result.is_ok(), "role {:?} should view the league", role);
    }

    Ok(())
}

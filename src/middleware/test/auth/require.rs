use super::*;

mod require_manage_users;
mod require_place_bid;
mod require_view_league;

/// Tests multiple permissions are all checked.
///
/// Verifies that when several permissions are required, the user must hold
/// every one of them for access to be granted.
///
/// Expected: Ok(User) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, Role::Commissioner.as_str()).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[
            Permission::ManageLeague,
            Permission::ManageTeam,
            Permission::ViewLeague,
        ])
        .await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.role, Role::Commissioner);

    Ok(())
}

/// Tests that any missing permission denies access.
///
/// Verifies that when checking multiple permissions, lacking one of them is
/// enough to be rejected.
///
/// Expected: Err(AuthError::AccessDenied) for the missing permission
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, Role::Commissioner.as_str()).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ManageLeague, Permission::ManageUsers])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("ManageUsers"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated user
/// with a valid database record is let through.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests an unauthenticated request.
///
/// Verifies that a session without a stored user id is rejected before any
/// database lookup.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_unauthenticated_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::ViewLeague]).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::UserNotInSession)
    ));

    Ok(())
}

/// Tests a stale session.
///
/// Verifies that a session referencing a deleted user id is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => assert_eq!(user_id, 999),
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a corrupted role column.
///
/// Verifies that a stored role string outside the closed role set is
/// surfaced as an error rather than silently treated as some role.
///
/// Expected: Err(AuthError::UnknownRole)
#[tokio::test]
async fn rejects_unknown_role_string() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "moderator").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UnknownRole { user_id, role }) => {
            assert_eq!(user_id, user.id);
            assert_eq!(role, "moderator");
        }
        e => panic!("Expected UnknownRole error, got: {:?}", e),
    }

    Ok(())
}

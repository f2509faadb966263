//! Authentication and permission guard.
//!
//! Resolves the session user and checks the permissions an endpoint
//! requires. Permissions are granted through the role inheritance table;
//! the guard never inspects role strings beyond parsing the stored value
//! once at the boundary.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    domain::role::Permission,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)`: The authenticated user, for handlers that need identity
    /// - `Err(AuthError::UserNotInSession)`: Not logged in
    /// - `Err(AuthError::UserNotInDatabase)`: Stale session
    /// - `Err(AuthError::AccessDenied)`: A permission is not granted
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(entity) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let role = entity.role.clone();
        let user = User::from_entity(entity)
            .map_err(|_| AuthError::UnknownRole { user_id, role })?;

        for permission in permissions {
            if !user.role.grants(*permission) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("missing permission {:?}", permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

//! Authentication service.
//!
//! Logins are session-based. The only credential the application itself
//! understands is the one-time admin bootstrap code issued at startup on a
//! fresh deployment; day-to-day identity is expected to be established by
//! whatever sits in front of the API and is out of scope here.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    domain::role::Role,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::admin::code::AdminCodeService,
};

/// Name given to the user created through the bootstrap code.
const BOOTSTRAP_ADMIN_NAME: &str = "admin";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_codes: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_codes: &'a AdminCodeService) -> Self {
        Self { db, admin_codes }
    }

    /// Redeems an admin bootstrap code and returns the admin user to log in.
    ///
    /// Creates the admin user on first redemption; a later redemption (after
    /// a fresh code was issued) just re-authenticates it.
    ///
    /// # Returns
    /// - `Ok(User)`: The admin user for the new session
    /// - `Err(AuthError::InvalidBootstrapCode)`: Missing, expired, or wrong code
    pub async fn login_with_code(&self, code: &str) -> Result<User, AppError> {
        if !self.admin_codes.redeem(code).await {
            return Err(AuthError::InvalidBootstrapCode.into());
        }

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                name: BOOTSTRAP_ADMIN_NAME.to_string(),
                role: Some(Role::Admin),
            })
            .await?;

        User::from_entity(user)
            .map_err(|err| AppError::InternalError(format!("Admin user failed to parse: {err}")))
    }
}

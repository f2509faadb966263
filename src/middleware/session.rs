//! Type-safe session access.
//!
//! Wraps the raw `Session` behind a small interface that owns the session
//! key constants, so handlers and guards never touch key strings directly.

use tower_sessions::Session;

use crate::error::AppError;

/// Session key holding the authenticated user's id.
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication state stored in the request session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id, if any.
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Ends the session, logging the user out.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

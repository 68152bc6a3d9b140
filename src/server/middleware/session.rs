//! Type-safe session management wrappers.
//!
//! Session keys live here so handlers and guards never touch raw key strings.
//! `AuthSession` is the only concern stored in the session: the id of the
//! logged-in user.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id and the
/// session lifecycle on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after a successful login. The session id is cycled first so a
    /// session id known before login cannot be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all data from the session and deletes it from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

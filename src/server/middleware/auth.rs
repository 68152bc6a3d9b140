use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{suspension::SuspensionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Site-wide permissions checked by `AuthGuard`.
///
/// Organization and project roles are checked by the services that own them.
pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in user and checks every requested permission.
    ///
    /// A suspension added while the user is logged in applies from the next request.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in and holding every permission
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::Suspended)` - User has an active suspension
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(suspension) = SuspensionRepository::new(self.db)
            .find_active_for_user(user_id, Utc::now())
            .await?
        {
            return Err(AuthError::Suspended {
                user_id,
                until: suspension.expired_at,
            }
            .into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin privileges required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

//! Account registration and password login.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{suspension::SuspensionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
    util::password::{hash_password, verify_password},
};

/// Service for registering accounts and checking login credentials.
///
/// Session handling stays in the controller; this service only decides whether
/// a set of credentials identifies an account that may log in.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a hashed password.
    ///
    /// While no admin exists, the new account is granted admin privileges so a
    /// fresh installation can be administered.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - E-mail already registered
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.email_exists(&param.email).await? {
            return Err(AppError::BadRequest(
                "E-mail is already registered".to_string(),
            ));
        }

        let is_admin = !repo.admin_exists().await?;
        let user = repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                is_admin,
            })
            .await?;

        if is_admin {
            tracing::info!("Granted admin privileges to first user {}", user.id);
        }

        Ok(user)
    }

    /// Checks e-mail and password and refuses suspended accounts.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an account without an active suspension
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail or wrong password
    /// - `Err(AuthError::Suspended)` - Account is suspended
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        if let Some(suspension) = SuspensionRepository::new(self.db)
            .find_active_for_user(user.id, Utc::now())
            .await?
        {
            return Err(AuthError::Suspended {
                user_id: user.id,
                until: suspension.expired_at,
            }
            .into());
        }

        Ok(user)
    }
}

//! User domain models and parameters.
//!
//! Provides the user domain model exposed to services, stripped of the password hash,
//! plus the parameter types used by registration and profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        friend::FriendStatus,
        user::{RegisterDto, UpdateUserDto, UserDto, UserProfileDto},
    },
    server::{error::AppError, util::validate::require_non_empty},
};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub about: Option<String>,
    /// Whether the user may manage suspensions and reports.
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            about: self.about,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }

    /// Converts the user into a profile DTO carrying the caller-relative friend status.
    pub fn into_profile_dto(self, friend_status: FriendStatus) -> UserProfileDto {
        UserProfileDto {
            user: self.into_dto(),
            friend_status,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password hash is dropped here; only `UserCredentials` carries it.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            about: entity.about,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash, used only by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a new account.
///
/// `password` is the plain text password; the auth service hashes it before
/// anything reaches the repository.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates and normalizes registration input.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Trimmed name and lower-cased e-mail
    /// - `Err(AppError::BadRequest)` - Empty name, malformed e-mail or short password
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let name = require_non_empty("name", dto.name)?;
        let email = require_non_empty("email", dto.email)?.to_lowercase();
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid e-mail address".to_string()));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
        })
    }
}

/// Parameters for inserting a user row with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Parameters for updating the caller's own profile.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub name: String,
    pub about: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: require_non_empty("name", dto.name)?,
            about: dto.about.filter(|about| !about.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto(password: &str) -> RegisterDto {
        RegisterDto {
            name: "  Budi ".to_string(),
            email: "Budi@Example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn normalizes_registration_input() {
        let param = RegisterUserParam::from_dto(register_dto("rahasia123")).unwrap();

        assert_eq!(param.name, "Budi");
        assert_eq!(param.email, "budi@example.com");
    }

    #[test]
    fn rejects_short_password() {
        let result = RegisterUserParam::from_dto(register_dto("short"));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut dto = register_dto("rahasia123");
        dto.email = "budi.example.com".to_string();

        assert!(matches!(
            RegisterUserParam::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }
}

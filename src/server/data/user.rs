//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by id and e-mail, profile updates and name
//! search, converting between entity models and domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User, UserCredentials};

/// Maximum number of results returned by a name search.
const SEARCH_LIMIT: u64 = 25;

/// Repository providing database operations for user management.
///
/// Generic over the connection so services can pass either the pooled
/// connection or an open transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, e-mail, password hash and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            about: ActiveValue::Set(None),
            is_admin: ActiveValue::Set(param.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by e-mail together with the stored password hash.
    ///
    /// Only the login flow should call this; everything else works with `User`.
    ///
    /// # Arguments
    /// - `email` - Lower-cased e-mail address
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No account with that e-mail
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether an account already uses the e-mail address.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during registration: while no admin exists, the next registered
    /// account is granted admin privileges.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Loads several users at once, ordered by id.
    ///
    /// Ids without a matching row are skipped.
    pub async fn find_many(&self, user_ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Searches users whose name contains `query`, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - At most 25 matching users
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Name.contains(query))
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates the name and about text of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.about = ActiveValue::Set(param.about);
        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}

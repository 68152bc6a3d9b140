//! Admin management of user suspensions.
//!
//! Every operation re-reads the acting user to confirm admin rights, so a
//! revoked admin loses access on their next request.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{suspension::SuspensionRepository, user::UserRepository},
    error::AppError,
    model::suspension::{CreateSuspensionParam, Suspension, UpdateSuspensionParam},
    service::access::require_admin,
};

pub struct SuspensionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuspensionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Suspends a user until `expired_at`.
    ///
    /// # Returns
    /// - `Ok(Suspension)` - Stored suspension
    /// - `Err(AppError::AuthErr)` - Actor is not an admin
    /// - `Err(AppError::NotFound)` - Suspended user does not exist
    /// - `Err(AppError::BadRequest)` - Expiry is not in the future
    pub async fn add(
        &self,
        actor_id: i32,
        param: CreateSuspensionParam,
    ) -> Result<Suspension, AppError> {
        require_admin(self.db, actor_id).await?;

        if UserRepository::new(self.db)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if param.expired_at <= Utc::now() {
            return Err(AppError::BadRequest(
                "Suspension must expire in the future".to_string(),
            ));
        }

        let suspension = SuspensionRepository::new(self.db).create(param).await?;
        tracing::info!(
            "Admin {} suspended user {} until {}",
            actor_id,
            suspension.user_id,
            suspension.expired_at
        );

        Ok(suspension)
    }

    pub async fn get_all(&self, actor_id: i32) -> Result<Vec<Suspension>, AppError> {
        require_admin(self.db, actor_id).await?;
        Ok(SuspensionRepository::new(self.db).get_all().await?)
    }

    /// Suspension currently in force for a user, if any.
    pub async fn get_active_for_user(
        &self,
        actor_id: i32,
        user_id: i32,
    ) -> Result<Option<Suspension>, AppError> {
        require_admin(self.db, actor_id).await?;
        Ok(SuspensionRepository::new(self.db)
            .find_active_for_user(user_id, Utc::now())
            .await?)
    }

    pub async fn update(
        &self,
        actor_id: i32,
        param: UpdateSuspensionParam,
    ) -> Result<Suspension, AppError> {
        require_admin(self.db, actor_id).await?;

        SuspensionRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Suspension not found".to_string()))
    }

    pub async fn delete(&self, actor_id: i32, suspension_id: i32) -> Result<(), AppError> {
        require_admin(self.db, actor_id).await?;

        if !SuspensionRepository::new(self.db)
            .delete(suspension_id)
            .await?
        {
            return Err(AppError::NotFound("Suspension not found".to_string()));
        }
        Ok(())
    }
}

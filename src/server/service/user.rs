//! User profiles and search.

use sea_orm::DatabaseConnection;

use crate::{
    model::friend::FriendStatus,
    server::{
        data::{friend::FriendRepository, user::UserRepository},
        error::AppError,
        model::user::{UpdateUserParam, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user together with the friend status seen from `viewer_id`.
    ///
    /// # Returns
    /// - `Ok((User, FriendStatus))` - `FriendStatus::None` when viewing yourself
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn get_profile(
        &self,
        viewer_id: i32,
        user_id: i32,
    ) -> Result<(User, FriendStatus), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let status = if viewer_id == user_id {
            FriendStatus::None
        } else {
            FriendRepository::new(self.db)
                .get_status(viewer_id, user_id)
                .await?
        };

        Ok((user, status))
    }

    /// Users whose name contains `query`. A blank query returns nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<User>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(UserRepository::new(self.db).search_by_name(query).await?)
    }

    pub async fn update_profile(&self, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

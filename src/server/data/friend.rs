//! Friendship edge repository.
//!
//! At most one edge exists per unordered pair of users, so every lookup checks
//! both directions. Status translation to the caller's point of view happens in
//! `FriendEdge::status_for`.

use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::friend::FriendStatus,
    server::{
        error::AppError,
        model::friend::{EdgeStatus, FriendEdge},
    },
};

pub struct FriendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Matches the edge between `a` and `b` in either direction.
fn between(a: i32, b: i32) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::friend::Column::FromUserId.eq(a))
                .add(entity::friend::Column::ToUserId.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::friend::Column::FromUserId.eq(b))
                .add(entity::friend::Column::ToUserId.eq(a)),
        )
}

impl<'a, C: ConnectionTrait> FriendRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the edge between two users regardless of direction.
    ///
    /// # Returns
    /// - `Ok(Some(FriendEdge))` - An edge exists
    /// - `Ok(None)` - The users are not connected
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored status is not recognized
    pub async fn find_between(&self, a: i32, b: i32) -> Result<Option<FriendEdge>, AppError> {
        let entity = entity::prelude::Friend::find()
            .filter(between(a, b))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(FriendEdge::from_entity(entity)?)),
            None => Ok(None),
        }
    }

    /// Friendship status of `b` as seen by `a`.
    ///
    /// # Returns
    /// - `FriendStatus::None` - No edge
    /// - `FriendStatus::Accepted` - Edge accepted
    /// - `FriendStatus::Sent` - Pending edge stored with `a` as sender
    /// - `FriendStatus::Pending` - Pending edge stored with `b` as sender
    pub async fn get_status(&self, a: i32, b: i32) -> Result<FriendStatus, AppError> {
        Ok(self
            .find_between(a, b)
            .await?
            .map(|edge| edge.status_for(a))
            .unwrap_or(FriendStatus::None))
    }

    /// Inserts a directed edge.
    pub async fn create(
        &self,
        from_user_id: i32,
        to_user_id: i32,
        status: EdgeStatus,
    ) -> Result<FriendEdge, AppError> {
        let entity = entity::friend::ActiveModel {
            from_user_id: ActiveValue::Set(from_user_id),
            to_user_id: ActiveValue::Set(to_user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(FriendEdge::from_entity(entity)?)
    }

    /// Deletes the edge between two users regardless of direction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when none existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_between(&self, a: i32, b: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Friend::delete_many()
            .filter(between(a, b))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// All edges touching `user_id`, newest first.
    pub async fn get_edges_for_user(&self, user_id: i32) -> Result<Vec<FriendEdge>, AppError> {
        let entities = entity::prelude::Friend::find()
            .filter(
                Condition::any()
                    .add(entity::friend::Column::FromUserId.eq(user_id))
                    .add(entity::friend::Column::ToUserId.eq(user_id)),
            )
            .order_by_desc(entity::friend::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| FriendEdge::from_entity(entity).map_err(AppError::from))
            .collect()
    }
}

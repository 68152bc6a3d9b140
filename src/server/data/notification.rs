//! Notification repository.
//!
//! Rows are only ever created by the notification listener; users read, mark
//! and delete their own notifications through `NotificationService`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, Notification},
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            type_id: ActiveValue::Set(param.type_id),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity)?)
    }

    /// Notifications of a user, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - All notifications of the user
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored category is not recognized
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Notification::from_entity(entity).map_err(AppError::from))
            .collect()
    }

    /// Finds a notification only if it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        notification_id: i32,
        user_id: i32,
    ) -> Result<Option<Notification>, AppError> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(Notification::from_entity(entity)?)),
            None => Ok(None),
        }
    }

    /// Marks one notification of a user as read.
    ///
    /// # Returns
    /// - `Ok(true)` - The notification exists and belongs to the user
    /// - `Ok(false)` - No such notification for this user
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of a user as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, notification_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Suspension repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::suspension::{
    CreateSuspensionParam, Suspension, UpdateSuspensionParam,
};

pub struct SuspensionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SuspensionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSuspensionParam) -> Result<Suspension, DbErr> {
        let entity = entity::suspension::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            reason: ActiveValue::Set(param.reason),
            expired_at: ActiveValue::Set(param.expired_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Suspension::from_entity(entity))
    }

    /// All suspensions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Suspension>, DbErr> {
        let entities = entity::prelude::Suspension::find()
            .order_by_desc(entity::suspension::Column::CreatedAt)
            .order_by_desc(entity::suspension::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Suspension::from_entity).collect())
    }

    /// The active suspension of a user that runs the longest.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    /// - `now` - Reference time; suspensions expiring after it are active
    ///
    /// # Returns
    /// - `Ok(Some(Suspension))` - The user is suspended
    /// - `Ok(None)` - No active suspension
    pub async fn find_active_for_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Suspension>, DbErr> {
        let entity = entity::prelude::Suspension::find()
            .filter(entity::suspension::Column::UserId.eq(user_id))
            .filter(entity::suspension::Column::ExpiredAt.gt(now))
            .order_by_desc(entity::suspension::Column::ExpiredAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Suspension::from_entity))
    }

    pub async fn update(&self, param: UpdateSuspensionParam) -> Result<Option<Suspension>, DbErr> {
        let Some(existing) = entity::prelude::Suspension::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::suspension::ActiveModel = existing.into();
        active.reason = ActiveValue::Set(param.reason);
        active.expired_at = ActiveValue::Set(param.expired_at);
        let entity = active.update(self.db).await?;

        Ok(Some(Suspension::from_entity(entity)))
    }

    pub async fn delete(&self, suspension_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Suspension::delete_by_id(suspension_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

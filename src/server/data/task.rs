//! Task repository.
//!
//! Owns the raw order arithmetic: the current maximum order of a bucket and
//! writes of explicit `(bucket_id, order)` positions. Deciding which position a
//! task gets is left to `TaskService`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::task::{CreateTaskParam, Task, UpdateTaskParam};

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new TaskRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a task at the given order.
    ///
    /// # Arguments
    /// - `param` - Task fields including the target bucket
    /// - `order` - Position within the bucket, computed by the caller
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown bucket
    pub async fn create(&self, param: CreateTaskParam, order: i32) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            bucket_id: ActiveValue::Set(param.bucket_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            order: ActiveValue::Set(order),
            start_at: ActiveValue::Set(param.start_at),
            end_at: ActiveValue::Set(param.end_at),
            done: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    pub async fn find_by_id(&self, task_id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_by_id(task_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Task::from_entity))
    }

    /// Tasks of a bucket ordered by `order`, ties broken by id.
    pub async fn get_by_bucket(&self, bucket_id: i32) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::BucketId.eq(bucket_id))
            .order_by_asc(entity::task::Column::Order)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Highest order currently used in a bucket.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Maximum order among the bucket's tasks
    /// - `Ok(None)` - The bucket has no tasks
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_max_order(&self, bucket_id: i32) -> Result<Option<i32>, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Task::find()
            .select_only()
            .column_as(entity::task::Column::Order.max(), "max_order")
            .filter(entity::task::Column::BucketId.eq(bucket_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    /// Writes an explicit position for a task.
    pub async fn set_position(&self, task_id: i32, bucket_id: i32, order: i32) -> Result<(), DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::Unchanged(task_id),
            bucket_id: ActiveValue::Set(bucket_id),
            order: ActiveValue::Set(order),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Applies the non-positional fields of an update. Absent fields are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Task after the update
    /// - `Ok(None)` - No task with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_fields(&self, param: &UpdateTaskParam) -> Result<Option<Task>, DbErr> {
        let Some(existing) = entity::prelude::Task::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::task::ActiveModel = existing.into();
        if let Some(name) = &param.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(description) = &param.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(start_at) = param.start_at {
            active.start_at = ActiveValue::Set(Some(start_at));
        }
        if let Some(end_at) = param.end_at {
            active.end_at = ActiveValue::Set(Some(end_at));
        }
        if let Some(done) = param.done {
            active.done = ActiveValue::Set(done);
        }
        let entity = active.update(self.db).await?;

        Ok(Some(Task::from_entity(entity)))
    }

    pub async fn delete(&self, task_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(task_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Assigns a user to a task.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment added
    /// - `Ok(false)` - The user was already assigned
    pub async fn assign(&self, task_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::TaskUser::find_by_id((task_id, user_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::task_user::ActiveModel {
            task_id: ActiveValue::Set(task_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn unassign(&self, task_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TaskUser::delete_by_id((task_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_assignees(&self, task_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::TaskUser::find()
            .filter(entity::task_user::Column::TaskId.eq(task_id))
            .order_by_asc(entity::task_user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Assignees for several tasks in one query, keyed by task id.
    pub async fn get_assignees_for(
        &self,
        task_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let mut assignees: HashMap<i32, Vec<i32>> = HashMap::new();
        if task_ids.is_empty() {
            return Ok(assignees);
        }

        let rows = entity::prelude::TaskUser::find()
            .filter(entity::task_user::Column::TaskId.is_in(task_ids))
            .order_by_asc(entity::task_user::Column::UserId)
            .all(self.db)
            .await?;
        for row in rows {
            assignees.entry(row.task_id).or_default().push(row.user_id);
        }

        Ok(assignees)
    }
}

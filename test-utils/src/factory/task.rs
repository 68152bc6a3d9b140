//! Task factory for creating test tasks with explicit ordering.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let task = TaskFactory::new(&db, bucket.id).order(5).build().await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    bucket_id: i32,
    name: String,
    order: i32,
    done: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Task {id}"`
    /// - order: `1`
    /// - done: `false`
    pub fn new(db: &'a DatabaseConnection, bucket_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            bucket_id,
            name: format!("Task {}", id),
            order: 1,
            done: false,
        }
    }

    /// Sets the task name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored order value.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets whether the task is done.
    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            bucket_id: ActiveValue::Set(self.bucket_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            order: ActiveValue::Set(self.order),
            start_at: ActiveValue::Set(None),
            end_at: ActiveValue::Set(None),
            done: ActiveValue::Set(self.done),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task in the bucket with the given order.
pub async fn create_task(
    db: &DatabaseConnection,
    bucket_id: i32,
    order: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, bucket_id).order(order).build().await
}

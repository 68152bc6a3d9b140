//! Task workflow: creation, ordering within buckets, assignment and completion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{project::ProjectRepository, task::TaskRepository},
    error::AppError,
    model::{
        event::DomainEvent,
        project::Bucket,
        task::{check_schedule, CreateTaskParam, Placement, Task, TaskWithAssignees, UpdateTaskParam},
    },
    service::{
        access::{find_bucket, load_actor, require_project_member},
        event::EventBus,
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Appends a task to the end of its bucket.
    ///
    /// The new order is the bucket's current maximum plus one; an empty bucket
    /// starts at 1.
    ///
    /// # Returns
    /// - `Ok(TaskWithAssignees)` - Created task, without assignees
    /// - `Err(AppError::NotFound)` - Bucket does not exist
    /// - `Err(AppError::AuthErr)` - Actor is not a member of the bucket's project
    pub async fn add_task(
        &self,
        actor_id: i32,
        param: CreateTaskParam,
    ) -> Result<TaskWithAssignees, AppError> {
        let bucket = find_bucket(self.db, param.bucket_id).await?;
        require_project_member(self.db, bucket.project_id, actor_id).await?;

        let txn = self.db.begin().await?;
        let repo = TaskRepository::new(&txn);
        let order = next_order(repo.get_max_order(bucket.id).await?)?;
        let task = repo.create(param, order).await?;
        txn.commit().await?;

        tracing::debug!("Created task {} in bucket {} at order {}", task.id, bucket.id, order);

        Ok(TaskWithAssignees {
            task,
            assignees: Vec::new(),
        })
    }

    /// Tasks of a bucket ordered by `order`, then id.
    pub async fn get_tasks(
        &self,
        actor_id: i32,
        bucket_id: i32,
    ) -> Result<Vec<TaskWithAssignees>, AppError> {
        let bucket = find_bucket(self.db, bucket_id).await?;
        require_project_member(self.db, bucket.project_id, actor_id).await?;

        let repo = TaskRepository::new(self.db);
        let tasks = repo.get_by_bucket(bucket_id).await?;
        let mut assignees = repo
            .get_assignees_for(tasks.iter().map(|task| task.id).collect())
            .await?;

        Ok(tasks
            .into_iter()
            .map(|task| TaskWithAssignees {
                assignees: assignees.remove(&task.id).unwrap_or_default(),
                task,
            })
            .collect())
    }

    pub async fn get_task(&self, actor_id: i32, task_id: i32) -> Result<TaskWithAssignees, AppError> {
        let (task, _) = self.load_for_member(actor_id, task_id).await?;
        let assignees = TaskRepository::new(self.db).get_assignees(task.id).await?;

        Ok(TaskWithAssignees { task, assignees })
    }

    /// Updates task fields and optionally moves the task.
    ///
    /// With `before_id` the task takes the order of that task verbatim and moves
    /// into its bucket. With only `bucket_id` the task goes to the end of that
    /// bucket. Tasks never leave their project.
    ///
    /// Marking an open task as done notifies the project admins other than the actor.
    ///
    /// # Returns
    /// - `Ok(TaskWithAssignees)` - Updated task
    /// - `Err(AppError::NotFound)` - Task, target bucket or `before_id` task does not exist
    /// - `Err(AppError::BadRequest)` - `bucket_id` disagrees with the `before_id` task's
    ///   bucket, the target is in another project, or the schedule ends before it starts
    /// - `Err(AppError::AuthErr)` - Actor is not a project member
    pub async fn update_task(
        &self,
        actor_id: i32,
        param: UpdateTaskParam,
    ) -> Result<TaskWithAssignees, AppError> {
        let (task, bucket) = self.load_for_member(actor_id, param.id).await?;
        check_schedule(param.start_at.or(task.start_at), param.end_at.or(task.end_at))?;

        let txn = self.db.begin().await?;
        let repo = TaskRepository::new(&txn);

        match param.placement() {
            Placement::Keep => {}
            Placement::Before {
                before_id,
                bucket_id,
            } => {
                let before = repo
                    .find_by_id(before_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
                if bucket_id.is_some_and(|id| id != before.bucket_id) {
                    return Err(AppError::BadRequest(
                        "bucket_id does not match the bucket of before_id".to_string(),
                    ));
                }
                let target = find_bucket(&txn, before.bucket_id).await?;
                ensure_same_project(&bucket, &target)?;

                repo.set_position(task.id, before.bucket_id, before.order)
                    .await?;
            }
            Placement::EndOf(bucket_id) => {
                let target = find_bucket(&txn, bucket_id).await?;
                ensure_same_project(&bucket, &target)?;

                let order = next_order(repo.get_max_order(bucket_id).await?)?;
                repo.set_position(task.id, bucket_id, order).await?;
            }
        }

        let updated = repo
            .update_fields(&param)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let assignees = repo.get_assignees(updated.id).await?;
        txn.commit().await?;

        if !task.done && updated.done {
            let actor = load_actor(self.db, actor_id).await?;
            let admin_ids = ProjectRepository::new(self.db)
                .get_admin_ids(bucket.project_id)
                .await?
                .into_iter()
                .filter(|id| *id != actor_id)
                .collect();

            self.events
                .emit(DomainEvent::TaskCompleted {
                    task_id: updated.id,
                    task_name: updated.name.clone(),
                    completed_by: actor.name,
                    admin_ids,
                })
                .await;
        }

        Ok(TaskWithAssignees {
            task: updated,
            assignees,
        })
    }

    pub async fn delete_task(&self, actor_id: i32, task_id: i32) -> Result<(), AppError> {
        let (task, _) = self.load_for_member(actor_id, task_id).await?;
        TaskRepository::new(self.db).delete(task.id).await?;
        Ok(())
    }

    /// Assigns a project member to a task and notifies them.
    ///
    /// Assigning yourself produces no notification.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Assignee ids after the change
    /// - `Err(AppError::BadRequest)` - User is not a project member or already assigned
    pub async fn assign(
        &self,
        actor_id: i32,
        task_id: i32,
        user_id: i32,
    ) -> Result<Vec<i32>, AppError> {
        let (task, bucket) = self.load_for_member(actor_id, task_id).await?;

        let role = ProjectRepository::new(self.db)
            .get_role(bucket.project_id, user_id)
            .await?;
        if !role.is_some_and(|role| role.is_member()) {
            return Err(AppError::BadRequest(
                "Only project members can be assigned".to_string(),
            ));
        }

        let repo = TaskRepository::new(self.db);
        if !repo.assign(task.id, user_id).await? {
            return Err(AppError::BadRequest(
                "User is already assigned to this task".to_string(),
            ));
        }

        if user_id != actor_id {
            let actor = load_actor(self.db, actor_id).await?;
            self.events
                .emit(DomainEvent::TaskAssigned {
                    task_id: task.id,
                    task_name: task.name,
                    assigner_name: actor.name,
                    user_id,
                })
                .await;
        }

        Ok(repo.get_assignees(task_id).await?)
    }

    pub async fn unassign(
        &self,
        actor_id: i32,
        task_id: i32,
        user_id: i32,
    ) -> Result<Vec<i32>, AppError> {
        let (task, _) = self.load_for_member(actor_id, task_id).await?;

        let repo = TaskRepository::new(self.db);
        if !repo.unassign(task.id, user_id).await? {
            return Err(AppError::NotFound(
                "User is not assigned to this task".to_string(),
            ));
        }

        Ok(repo.get_assignees(task.id).await?)
    }

    /// Loads a task with its bucket after checking the actor's project membership.
    async fn load_for_member(&self, actor_id: i32, task_id: i32) -> Result<(Task, Bucket), AppError> {
        let task = TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let bucket = find_bucket(self.db, task.bucket_id).await?;
        require_project_member(self.db, bucket.project_id, actor_id).await?;

        Ok((task, bucket))
    }
}

/// Order for a task appended after the current maximum; an empty bucket starts at 1.
fn next_order(max: Option<i32>) -> Result<i32, AppError> {
    max.unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::InternalError("Task order exceeds the supported range".to_string()))
}

fn ensure_same_project(current: &Bucket, target: &Bucket) -> Result<(), AppError> {
    if current.project_id != target.project_id {
        return Err(AppError::BadRequest(
            "Tasks cannot be moved to another project".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_order_starts_empty_buckets_at_one() {
        assert_eq!(next_order(None).unwrap(), 1);
        assert_eq!(next_order(Some(4)).unwrap(), 5);
    }

    #[test]
    fn next_order_rejects_overflow() {
        assert!(matches!(
            next_order(Some(i32::MAX)),
            Err(AppError::InternalError(_))
        ));
    }
}

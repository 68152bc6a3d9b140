//! Task domain models and parameters.
//!
//! Tasks live in a bucket and are ordered by the integer `order` column. New
//! tasks append after the bucket's current maximum. Moving a task before
//! another copies that task's order verbatim, so equal orders are possible and
//! listings break ties by id.

use chrono::{DateTime, Utc};

use crate::{
    model::task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub bucket_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Position within the bucket. Not unique.
    pub order: i32,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn into_dto(self, assignees: Vec<i32>) -> TaskDto {
        TaskDto {
            id: self.id,
            bucket_id: self.bucket_id,
            name: self.name,
            description: self.description,
            order: self.order,
            start_at: self.start_at,
            end_at: self.end_at,
            done: self.done,
            created_at: self.created_at,
            assignees,
        }
    }

    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            bucket_id: entity.bucket_id,
            name: entity.name,
            description: entity.description,
            order: entity.order,
            start_at: entity.start_at,
            end_at: entity.end_at,
            done: entity.done,
            created_at: entity.created_at,
        }
    }
}

/// Task together with the ids of its assignees.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithAssignees {
    pub task: Task,
    pub assignees: Vec<i32>,
}

impl TaskWithAssignees {
    pub fn into_dto(self) -> TaskDto {
        self.task.into_dto(self.assignees)
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParam {
    pub bucket_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

impl CreateTaskParam {
    pub fn from_dto(bucket_id: i32, dto: CreateTaskDto) -> Result<Self, AppError> {
        check_schedule(dto.start_at, dto.end_at)?;

        Ok(Self {
            bucket_id,
            name: require_non_empty("name", dto.name)?,
            description: dto.description,
            start_at: dto.start_at,
            end_at: dto.end_at,
        })
    }
}

/// Where an update places the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Order and bucket stay as they are.
    Keep,
    /// Take the order of the given task and move into its bucket.
    /// `bucket_id`, when also given, must match that bucket.
    Before {
        before_id: i32,
        bucket_id: Option<i32>,
    },
    /// Append to the end of the given bucket.
    EndOf(i32),
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParam {
    pub id: i32,
    pub bucket_id: Option<i32>,
    pub before_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub done: Option<bool>,
}

impl UpdateTaskParam {
    pub fn from_dto(id: i32, dto: UpdateTaskDto) -> Result<Self, AppError> {
        let name = match dto.name {
            Some(name) => Some(require_non_empty("name", name)?),
            None => None,
        };

        Ok(Self {
            id,
            bucket_id: dto.bucket_id,
            before_id: dto.before_id,
            name,
            description: dto.description,
            start_at: dto.start_at,
            end_at: dto.end_at,
            done: dto.done,
        })
    }

    pub fn placement(&self) -> Placement {
        match (self.before_id, self.bucket_id) {
            (Some(before_id), bucket_id) => Placement::Before {
                before_id,
                bucket_id,
            },
            (None, Some(bucket_id)) => Placement::EndOf(bucket_id),
            (None, None) => Placement::Keep,
        }
    }
}

/// Rejects schedules that end before they start.
pub fn check_schedule(
    start_at: Option<DateTime<Utc>>,
    end_at: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start_at, end_at) {
        if end < start {
            return Err(AppError::BadRequest(
                "Task cannot end before it starts".to_string(),
            ));
        }
    }
    Ok(())
}

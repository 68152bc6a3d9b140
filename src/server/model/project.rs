//! Project and bucket domain models and parameters.
//!
//! Projects belong to an organization and group their tasks into buckets
//! (the columns of a board). Each project gets a discussion chatroom on creation.

use chrono::{DateTime, Utc};

use crate::{
    model::project::{
        BucketDto, CreateProjectDto, ProjectDto, ProjectMemberDto, ProjectRole, UpdateProjectDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
        util::validate::require_non_empty,
    },
};

/// Name of the discussion chatroom created alongside every project.
pub const DEFAULT_CHATROOM_NAME: &str = "Diskusi";

impl ProjectRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Dev => "Dev",
            Self::Invited => "Invited",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "Admin" => Ok(Self::Admin),
            "Dev" => Ok(Self::Dev),
            "Invited" => Ok(Self::Invited),
            other => Err(InternalError::InvalidEnumValue {
                kind: "project role",
                value: other.to_string(),
            }),
        }
    }

    pub fn is_member(&self) -> bool {
        !matches!(self, Self::Invited)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub org_id: i32,
    pub name: String,
    pub description: String,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            org_id: self.org_id,
            name: self.name,
            description: self.description,
            archived: self.archived,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            org_id: entity.org_id,
            name: entity.name,
            description: entity.description,
            archived: entity.archived,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMember {
    pub user: User,
    pub role: ProjectRole,
}

impl ProjectMember {
    pub fn into_dto(self) -> ProjectMemberDto {
        ProjectMemberDto {
            user: self.user.into_dto(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParam {
    pub org_id: i32,
    pub name: String,
    pub description: String,
}

impl CreateProjectParam {
    pub fn from_dto(org_id: i32, dto: CreateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            org_id,
            name: require_non_empty("name", dto.name)?,
            description: dto.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProjectParam {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub archived: bool,
}

impl UpdateProjectParam {
    pub fn from_dto(id: i32, dto: UpdateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: require_non_empty("name", dto.name)?,
            description: dto.description.trim().to_string(),
            archived: dto.archived,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
}

impl Bucket {
    pub fn into_dto(self) -> BucketDto {
        BucketDto {
            id: self.id,
            project_id: self.project_id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::bucket::Model) -> Self {
        Self {
            id: entity.id,
            project_id: entity.project_id,
            name: entity.name,
        }
    }
}

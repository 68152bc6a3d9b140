use chrono::{DateTime, Utc};

use crate::{
    model::report::{CreateReportDto, ReportDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i32,
    pub sender_id: i32,
    pub reported_id: i32,
    pub title: String,
    pub description: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            id: self.id,
            sender_id: self.sender_id,
            reported_id: self.reported_id,
            title: self.title,
            description: self.description,
            resolved: self.resolved,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::report::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            reported_id: entity.reported_id,
            title: entity.title,
            description: entity.description,
            resolved: entity.resolved,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReportParam {
    pub sender_id: i32,
    pub reported_id: i32,
    pub title: String,
    pub description: String,
}

impl CreateReportParam {
    pub fn from_dto(sender_id: i32, dto: CreateReportDto) -> Result<Self, AppError> {
        if dto.reported_id == sender_id {
            return Err(AppError::BadRequest("You cannot report yourself".to_string()));
        }

        Ok(Self {
            sender_id,
            reported_id: dto.reported_id,
            title: require_non_empty("title", dto.title)?,
            description: dto.description.trim().to_string(),
        })
    }
}

//! Suspension domain models.
//!
//! A suspension is active while its `expired_at` lies in the future. Suspended
//! users cannot log in.

use chrono::{DateTime, Utc};

use crate::{
    model::suspension::{CreateSuspensionDto, SuspensionDto, UpdateSuspensionDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Suspension {
    pub id: i32,
    pub user_id: i32,
    pub reason: String,
    pub expired_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Suspension {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expired_at > now
    }

    pub fn into_dto(self) -> SuspensionDto {
        SuspensionDto {
            id: self.id,
            user_id: self.user_id,
            reason: self.reason,
            expired_at: self.expired_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::suspension::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            reason: entity.reason,
            expired_at: entity.expired_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSuspensionParam {
    pub user_id: i32,
    pub reason: String,
    pub expired_at: DateTime<Utc>,
}

impl CreateSuspensionParam {
    pub fn from_dto(dto: CreateSuspensionDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: dto.user_id,
            reason: require_non_empty("reason", dto.reason)?,
            expired_at: dto.expired_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSuspensionParam {
    pub id: i32,
    pub reason: String,
    pub expired_at: DateTime<Utc>,
}

impl UpdateSuspensionParam {
    pub fn from_dto(id: i32, dto: UpdateSuspensionDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            reason: require_non_empty("reason", dto.reason)?,
            expired_at: dto.expired_at,
        })
    }
}

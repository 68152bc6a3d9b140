use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuspensionDto {
    pub id: i32,
    pub user_id: i32,
    pub reason: String,
    pub expired_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSuspensionDto {
    pub user_id: i32,
    pub reason: String,
    pub expired_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSuspensionDto {
    pub reason: String,
    pub expired_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub id: i32,
    pub sender_id: i32,
    pub reported_id: i32,
    pub title: String,
    pub description: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReportDto {
    pub reported_id: i32,
    pub title: String,
    pub description: String,
}

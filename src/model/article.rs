use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article listing entry without the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Full article. `content` is the markdown source, `html` its rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub content: String,
    pub html: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleInputDto {
    pub name: String,
    pub description: String,
    pub content: String,
}

use chrono::{DateTime, Utc};

use crate::{
    model::article::{ArticleDto, ArticleInputDto, ArticleSummaryDto},
    server::{
        error::AppError,
        util::{markdown::render_markdown, validate::require_non_empty},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    /// Markdown source.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Converts to the full DTO, rendering the markdown body to HTML.
    pub fn into_dto(self) -> ArticleDto {
        let html = render_markdown(&self.content);
        ArticleDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            content: self.content,
            html,
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleParam {
    pub name: String,
    pub description: String,
    pub content: String,
}

impl ArticleParam {
    pub fn from_dto(dto: ArticleInputDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty("name", dto.name)?,
            description: dto.description.trim().to_string(),
            content: dto.content,
        })
    }
}

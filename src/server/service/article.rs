use sea_orm::DatabaseConnection;

use crate::server::{
    data::article::ArticleRepository,
    error::{auth::AuthError, AppError},
    model::article::{Article, ArticleParam},
    service::access::load_actor,
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, actor_id: i32, param: ArticleParam) -> Result<Article, AppError> {
        Ok(ArticleRepository::new(self.db)
            .create(actor_id, param)
            .await?)
    }

    /// Articles newest first, optionally limited to one author.
    pub async fn list(&self, author_id: Option<i32>) -> Result<Vec<Article>, AppError> {
        Ok(ArticleRepository::new(self.db).get_all(author_id).await?)
    }

    pub async fn get(&self, article_id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    /// Replaces an article's content. Only the author may edit.
    pub async fn update(
        &self,
        actor_id: i32,
        article_id: i32,
        param: ArticleParam,
    ) -> Result<Article, AppError> {
        let article = self.get(article_id).await?;
        if article.user_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("not the author of article {}", article_id),
            )
            .into());
        }

        ArticleRepository::new(self.db)
            .update(article_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    /// Deletes an article. Allowed for its author and for site admins.
    pub async fn delete(&self, actor_id: i32, article_id: i32) -> Result<(), AppError> {
        let article = self.get(article_id).await?;
        if article.user_id != actor_id && !load_actor(self.db, actor_id).await?.is_admin {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("not the author of article {}", article_id),
            )
            .into());
        }

        ArticleRepository::new(self.db).delete(article_id).await?;
        Ok(())
    }
}

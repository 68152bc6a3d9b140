use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::article::{Article, ArticleParam};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, param: ArticleParam) -> Result<Article, DbErr> {
        let entity = entity::article::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    pub async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Articles newest first, optionally restricted to one author.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Article>, DbErr> {
        let mut query = entity::prelude::Article::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::article::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    pub async fn update(
        &self,
        article_id: i32,
        param: ArticleParam,
    ) -> Result<Option<Article>, DbErr> {
        let Some(existing) = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::article::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.content = ActiveValue::Set(param.content);
        let entity = active.update(self.db).await?;

        Ok(Some(Article::from_entity(entity)))
    }

    pub async fn delete(&self, article_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Article::delete_by_id(article_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

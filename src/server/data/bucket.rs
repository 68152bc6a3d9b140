use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::project::Bucket;

pub struct BucketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BucketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, project_id: i32, name: String) -> Result<Bucket, DbErr> {
        let entity = entity::bucket::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bucket::from_entity(entity))
    }

    pub async fn find_by_id(&self, bucket_id: i32) -> Result<Option<Bucket>, DbErr> {
        let entity = entity::prelude::Bucket::find_by_id(bucket_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Bucket::from_entity))
    }

    /// Buckets of a project in creation order.
    pub async fn get_by_project(&self, project_id: i32) -> Result<Vec<Bucket>, DbErr> {
        let entities = entity::prelude::Bucket::find()
            .filter(entity::bucket::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::bucket::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bucket::from_entity).collect())
    }

    pub async fn rename(&self, bucket_id: i32, name: String) -> Result<Option<Bucket>, DbErr> {
        let Some(existing) = entity::prelude::Bucket::find_by_id(bucket_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bucket::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        let entity = active.update(self.db).await?;

        Ok(Some(Bucket::from_entity(entity)))
    }

    /// Deletes a bucket and, by cascade, its tasks.
    pub async fn delete(&self, bucket_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bucket::delete_by_id(bucket_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

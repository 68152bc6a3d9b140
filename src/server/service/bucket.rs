use sea_orm::DatabaseConnection;

use crate::{
    model::project::ProjectRole,
    server::{
        data::bucket::BucketRepository,
        error::AppError,
        model::project::Bucket,
        service::access::{find_bucket, require_project_member, require_project_role},
        util::validate::require_non_empty,
    },
};

/// Bucket CRUD. Any project member may read and create buckets; renaming
/// and deleting are limited to project admins.
pub struct BucketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BucketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        actor_id: i32,
        project_id: i32,
        name: String,
    ) -> Result<Bucket, AppError> {
        let name = require_non_empty("name", name)?;
        require_project_member(self.db, project_id, actor_id).await?;

        Ok(BucketRepository::new(self.db)
            .create(project_id, name)
            .await?)
    }

    pub async fn list(&self, actor_id: i32, project_id: i32) -> Result<Vec<Bucket>, AppError> {
        require_project_member(self.db, project_id, actor_id).await?;
        Ok(BucketRepository::new(self.db)
            .get_by_project(project_id)
            .await?)
    }

    pub async fn rename(
        &self,
        actor_id: i32,
        bucket_id: i32,
        name: String,
    ) -> Result<Bucket, AppError> {
        let name = require_non_empty("name", name)?;
        let bucket = find_bucket(self.db, bucket_id).await?;
        require_project_role(self.db, bucket.project_id, actor_id, &[ProjectRole::Admin]).await?;

        BucketRepository::new(self.db)
            .rename(bucket_id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Bucket not found".to_string()))
    }

    /// Deletes the bucket and every task in it.
    pub async fn delete(&self, actor_id: i32, bucket_id: i32) -> Result<(), AppError> {
        let bucket = find_bucket(self.db, bucket_id).await?;
        require_project_role(self.db, bucket.project_id, actor_id, &[ProjectRole::Admin]).await?;

        BucketRepository::new(self.db).delete(bucket_id).await?;
        Ok(())
    }
}

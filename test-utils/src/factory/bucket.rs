//! Bucket factory for creating test buckets.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bucket named `"Bucket {id}"` in the given project.
///
/// # Returns
/// - `Ok(entity::bucket::Model)` - Created bucket
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bucket(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::bucket::Model, DbErr> {
    entity::bucket::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        name: ActiveValue::Set(format!("Bucket {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

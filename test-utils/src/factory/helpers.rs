//! Shared helper utilities for factory methods.
//!
//! Provides the unique id counter used across factories and shortcuts for creating
//! entities together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an organization and a project in it, both owned by `user_id`.
///
/// The user becomes `Admin` of the organization and of the project.
///
/// # Returns
/// - `Ok((organization, project))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_dependencies(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::organization::Model, entity::project::Model), DbErr> {
    let org = crate::factory::organization::create_organization(db).await?;
    crate::factory::organization::add_member(db, org.id, user_id, "Admin").await?;

    let project = crate::factory::project::create_project(db, org.id).await?;
    crate::factory::project::add_member(db, project.id, user_id, "Admin").await?;

    Ok((org, project))
}

/// Creates an organization, project and bucket owned by `user_id`.
///
/// # Returns
/// - `Ok((organization, project, bucket))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bucket_with_dependencies(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<
    (
        entity::organization::Model,
        entity::project::Model,
        entity::bucket::Model,
    ),
    DbErr,
> {
    let (org, project) = create_project_with_dependencies(db, user_id).await?;
    let bucket = crate::factory::bucket::create_bucket(db, project.id).await?;

    Ok((org, project, bucket))
}

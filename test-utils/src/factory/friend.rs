//! Friend factory for inserting friendship edges directly.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a friendship edge from `from_user_id` to `to_user_id` with the stored status
/// (`Pending` or `Accepted`).
pub async fn create_friend_edge(
    db: &DatabaseConnection,
    from_user_id: i32,
    to_user_id: i32,
    status: &str,
) -> Result<entity::friend::Model, DbErr> {
    entity::friend::ActiveModel {
        from_user_id: ActiveValue::Set(from_user_id),
        to_user_id: ActiveValue::Set(to_user_id),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

//! Notification factory for inserting notifications directly.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an unread notification for the user in the given category.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    category: &str,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set("Test notification".to_string()),
        description: ActiveValue::Set("Something happened".to_string()),
        category: ActiveValue::Set(category.to_string()),
        type_id: ActiveValue::Set(None),
        read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

use sea_orm::EntityTrait;

use super::*;

/// Tests storing a notification with its category label.
///
/// Expected: unread notification whose category round-trips
#[tokio::test]
async fn stores_unread_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam {
            user_id: user.id,
            title: "Pesan baru".to_string(),
            description: "Sari mengirim pesan".to_string(),
            category: NotificationCategory::DiskusiPribadi,
            type_id: Some(3),
        })
        .await?;

    assert!(!notification.read);
    assert_eq!(notification.category, NotificationCategory::DiskusiPribadi);
    assert_eq!(notification.type_id, Some(3));

    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .expect("notification should exist");
    assert_eq!(stored.category, "Diskusi Pribadi");

    Ok(())
}

use super::*;

/// Tests that a user only sees their own notifications, newest first.
///
/// Expected: the two notifications of `user` in reverse insertion order
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let older = factory::notification::create_notification(db, user.id, "Tugas").await?;
    let newer = factory::notification::create_notification(db, user.id, "Teman").await?;
    factory::notification::create_notification(db, other.id, "Tugas").await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_by_user(user.id).await?;

    let ids: Vec<i32> = notifications.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

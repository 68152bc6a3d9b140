use super::*;

/// Tests that marking requires ownership.
///
/// Expected: Ok(false) for another user's notification, Ok(true) for the owner
#[tokio::test]
async fn marks_only_owned_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id, "Proyek").await?;

    let repo = NotificationRepository::new(db);

    assert!(!repo.mark_read(notification.id, stranger.id).await?);
    assert!(repo.mark_read(notification.id, owner.id).await?);

    let stored = repo
        .find_owned(notification.id, owner.id)
        .await?
        .expect("notification should exist");
    assert!(stored.read);

    Ok(())
}

/// Tests marking every unread notification of a user.
///
/// Expected: Ok(2) and no unread notifications left
#[tokio::test]
async fn marks_all_unread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::notification::create_notification(db, user.id, "Tugas").await?;
    factory::notification::create_notification(db, user.id, "Laporan").await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert!(repo.get_by_user(user.id).await?.iter().all(|n| n.read));
    assert_eq!(repo.mark_all_read(user.id).await?, 0);

    Ok(())
}

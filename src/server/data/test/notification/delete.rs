use super::*;

/// Tests that only the owner can delete a notification.
///
/// Expected: Ok(false) for a stranger, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_owned_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id, "Teman").await?;

    let repo = NotificationRepository::new(db);

    assert!(!repo.delete(notification.id, stranger.id).await?);
    assert!(repo.delete(notification.id, owner.id).await?);
    assert!(repo.find_owned(notification.id, owner.id).await?.is_none());

    Ok(())
}

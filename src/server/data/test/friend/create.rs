use super::*;

/// Tests inserting a pending edge.
///
/// Expected: Ok(FriendEdge) stored with the sender as `from_user_id`
#[tokio::test]
async fn stores_pending_edge_from_sender() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let recipient = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let edge = repo
        .create(sender.id, recipient.id, EdgeStatus::Pending)
        .await?;

    assert_eq!(edge.from_user_id, sender.id);
    assert_eq!(edge.to_user_id, recipient.id);
    assert_eq!(edge.status, EdgeStatus::Pending);

    Ok(())
}

/// Tests that the composite key rejects a second edge in the same direction.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_directed_edge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    repo.create(a.id, b.id, EdgeStatus::Pending).await?;

    assert!(repo.create(a.id, b.id, EdgeStatus::Pending).await.is_err());

    Ok(())
}

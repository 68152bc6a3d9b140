use super::*;

/// Tests status without any edge.
///
/// Expected: FriendStatus::None from both sides
#[tokio::test]
async fn returns_none_without_edge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.get_status(a.id, b.id).await?, FriendStatus::None);
    assert_eq!(repo.get_status(b.id, a.id).await?, FriendStatus::None);

    Ok(())
}

/// Tests that a pending edge reads differently from each side.
///
/// Expected: Sent for the stored sender, Pending for the recipient
#[tokio::test]
async fn pending_edge_is_relative_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, a.id, b.id, "Pending").await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.get_status(a.id, b.id).await?, FriendStatus::Sent);
    assert_eq!(repo.get_status(b.id, a.id).await?, FriendStatus::Pending);

    Ok(())
}

/// Tests that an accepted edge reads the same from both sides.
///
/// Expected: Accepted for both users
#[tokio::test]
async fn accepted_edge_is_symmetric() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, b.id, a.id, "Accepted").await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.get_status(a.id, b.id).await?, FriendStatus::Accepted);
    assert_eq!(repo.get_status(b.id, a.id).await?, FriendStatus::Accepted);

    Ok(())
}

/// Tests that an unknown stored status surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, a.id, b.id, "Blocked").await?;

    let repo = FriendRepository::new(db);
    let result = repo.get_status(a.id, b.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

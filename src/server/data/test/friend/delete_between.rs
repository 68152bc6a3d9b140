use super::*;

/// Tests deleting an edge from the side that did not create it.
///
/// Expected: Ok(1) and no edge left afterwards
#[tokio::test]
async fn deletes_edge_in_either_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, a.id, b.id, "Accepted").await?;

    let repo = FriendRepository::new(db);
    let removed = repo.delete_between(b.id, a.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_between(a.id, b.id).await?.is_none());

    Ok(())
}

/// Tests deleting when no edge exists.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_without_edge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.delete_between(a.id, b.id).await?, 0);

    Ok(())
}
